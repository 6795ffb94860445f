use ggez::input::keyboard::KeyCode;
use ggez::mint::Point2;
use ggez::GameResult;

use super::{pressed_enter, GameScene, Scene, SceneContext, Transition};
use crate::render::{Surface, TextAnchor, BACKGROUND_COLOR, TEXT_COLOR};

const RULES: [&str; 5] = [
    "Steer the snake with W A S D or the arrow keys.",
    "Eat food to grow and score a point.",
    "Every three seconds alive scores another point.",
    "The snake speeds up with every point.",
    "Hitting a wall or your own body ends the game.",
];

/// Static screen explaining how to play
pub struct RulesScene;

impl RulesScene {
    pub fn new() -> Self {
        RulesScene
    }

    pub(super) fn handle_input(&mut self, ctx: &SceneContext, keys: &[KeyCode]) -> Transition {
        if pressed_enter(keys) {
            Transition::To(Scene::Game(GameScene::new(&ctx.config)))
        } else {
            Transition::Continue
        }
    }

    pub(super) fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.fill(BACKGROUND_COLOR);
        let (w, h) = surface.size();
        surface.draw_text(
            "RULES",
            Point2 { x: w / 2.0, y: 50.0 },
            72.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )?;
        for (i, line) in RULES.iter().enumerate() {
            surface.draw_text(
                line,
                Point2 {
                    x: w / 2.0,
                    y: 200.0 + i as f32 * 50.0,
                },
                28.0,
                TEXT_COLOR,
                TextAnchor::Center,
            )?;
        }
        surface.draw_text(
            "Press Enter to Start...",
            Point2 { x: w / 2.0, y: h - 50.0 },
            24.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )
    }
}

impl Default for RulesScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entity::{Entity, Position};
    use crate::render::testing::RecordingSurface;
    use crate::scores::MemoryScoreStore;

    #[test]
    fn test_enter_starts_fresh_game() {
        let ctx = SceneContext::new(GameConfig::seeded(1), Box::new(MemoryScoreStore::new()));
        let mut scene = RulesScene::new();
        assert!(scene.handle_input(&ctx, &[KeyCode::W]).is_continue());

        match scene.handle_input(&ctx, &[KeyCode::Return]) {
            Transition::To(Scene::Game(game)) => {
                let snake = game.snake();
                assert_eq!(snake.score(), 0);
                assert!(snake.body().is_empty());
                assert!(snake.is_alive());
                assert_eq!(snake.position(), Position::new(400, 400));
            }
            other => panic!("unexpected transition {other:?}"),
        }
    }

    #[test]
    fn test_draw_rules() {
        let mut surface = RecordingSurface::new();
        RulesScene::new().draw(&mut surface).unwrap();
        let texts = surface.texts();
        assert_eq!(texts.first(), Some(&"RULES"));
        assert_eq!(texts.len(), RULES.len() + 2);
    }
}
