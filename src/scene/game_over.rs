use ggez::input::keyboard::KeyCode;
use ggez::mint::Point2;
use ggez::GameResult;
use log::info;

use super::{pressed_enter, GameScene, Scene, SceneContext, Transition};
use crate::render::{Surface, TextAnchor, BACKGROUND_COLOR, TEXT_COLOR};
use crate::scores::{ScoreBoard, ScoreRecord};

const ROW_HEIGHT: f32 = 20.0;

/// Shows the score table. The finished game's score is on the board from the
/// start but only written out when the player moves on or quits.
pub struct GameOverScene {
    final_score: u32,
    board: ScoreBoard,
}

impl GameOverScene {
    pub fn new(ctx: &SceneContext, final_score: u32) -> GameResult<Self> {
        let mut board = ctx.scores.load()?;
        board.insert(ScoreRecord::now(final_score));
        Ok(Self { final_score, board })
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub(super) fn persist(&self, ctx: &SceneContext) -> GameResult {
        ctx.scores.save(&self.board)?;
        Ok(())
    }

    pub(super) fn handle_input(&mut self, ctx: &SceneContext, keys: &[KeyCode]) -> GameResult<Transition> {
        if !pressed_enter(keys) {
            return Ok(Transition::Continue);
        }
        self.persist(ctx)?;
        info!("Starting a new game");
        Ok(Transition::To(Scene::Game(GameScene::new(&ctx.config))))
    }

    pub(super) fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.fill(BACKGROUND_COLOR);
        let (w, h) = surface.size();
        let center = w / 2.0;

        surface.draw_text(
            "GAME OVER",
            Point2 { x: center, y: 50.0 },
            72.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )?;

        let mut y = 100.0;
        surface.draw_text(
            "DATE                   SCORE",
            Point2 { x: center, y },
            15.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )?;
        for record in self.board.records() {
            y += ROW_HEIGHT;
            surface.draw_text(
                &record.date,
                Point2 { x: center - 50.0, y },
                15.0,
                TEXT_COLOR,
                TextAnchor::Center,
            )?;
            surface.draw_text(
                &record.score.to_string(),
                Point2 { x: center + 42.0, y },
                15.0,
                TEXT_COLOR,
                TextAnchor::Center,
            )?;
        }

        surface.draw_text(
            "Press Enter to Try Again...",
            Point2 { x: center, y: h - 50.0 },
            24.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )
    }
}
