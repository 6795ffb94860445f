use ggez::input::keyboard::KeyCode;
use ggez::mint::Point2;
use ggez::GameResult;
use log::{debug, info};
use std::time::Duration;

use super::{GameOverScene, Scene, SceneContext, Transition};
use crate::config::GameConfig;
use crate::entity::Entity;
use crate::food::Food;
use crate::render::{Surface, TextAnchor, BACKGROUND_COLOR, TEXT_COLOR};
use crate::snake::Snake;

/// A round in progress: one snake, one piece of food, and a clock for the HUD.
pub struct GameScene {
    snake: Snake,
    food: Food,
    elapsed: Duration,
}

impl GameScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            snake: Snake::new(config),
            food: Food::new(config),
            elapsed: Duration::ZERO,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub(super) fn handle_input(&mut self, keys: &[KeyCode]) -> Transition {
        for key in keys {
            self.snake.handle_input(*key);
        }
        Transition::Continue
    }

    pub(super) fn update(&mut self, ctx: &SceneContext, dt: Duration) -> GameResult<Transition> {
        self.elapsed += dt;
        self.snake.update(dt);

        if self.snake.is_alive() && self.snake.collides(&self.food) {
            self.snake.grow();
            self.food.update(dt);
            debug!(
                "Food eaten, score {} with {} segments",
                self.snake.score(),
                self.snake.body().len()
            );
        }

        if !self.snake.is_alive() {
            let score = self.snake.score();
            info!("Game over after {:.1}s with score {}", self.elapsed.as_secs_f32(), score);
            let game_over = GameOverScene::new(ctx, score)?;
            return Ok(Transition::To(Scene::GameOver(game_over)));
        }

        Ok(Transition::Continue)
    }

    pub(super) fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.fill(BACKGROUND_COLOR);
        self.snake.draw(surface)?;
        self.food.draw(surface)?;

        let hud = format!(
            "Score:  {}    Time:  {}",
            self.snake.score(),
            self.elapsed.as_secs()
        );
        surface.draw_text(
            &hud,
            Point2 { x: 50.0, y: 50.0 },
            24.0,
            TEXT_COLOR,
            TextAnchor::TopLeft,
        )
    }
}
