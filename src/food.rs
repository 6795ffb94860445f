use ggez::graphics::Rect;
use ggez::input::keyboard::KeyCode;
use ggez::GameResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::config::GameConfig;
use crate::entity::{Entity, Position, Size};
use crate::render::{Surface, FOOD_COLOR};

/// A piece of food. Eating it moves it somewhere else on the grid.
pub struct Food {
    position: Position,
    size: Size,
    columns: i32,
    rows: i32,
    rng: StdRng,
}

impl Food {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut food = Food {
            position: Position::new(0, 0),
            size: Size::square(config.cell),
            columns: config.columns(),
            rows: config.rows(),
            rng,
        };
        food.respawn();
        food
    }

    /// Pick a fresh cell, each axis independently and uniformly
    pub fn respawn(&mut self) {
        let x = self.rng.gen_range(0..self.columns) * self.size.w;
        let y = self.rng.gen_range(0..self.rows) * self.size.h;
        self.position = Position::new(x, y);
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Position) {
        self.position = position;
    }
}

impl Entity for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn handle_input(&mut self, _key: KeyCode) {}

    fn update(&mut self, _dt: Duration) {
        self.respawn();
    }

    fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        let rect = Rect::new(
            self.position.x as f32,
            self.position.y as f32,
            self.size.w as f32,
            self.size.h as f32,
        );
        surface.draw_rect(rect, FOOD_COLOR)
    }

    fn collides(&self, other: &dyn Entity) -> bool {
        self.position == other.position()
    }
}
