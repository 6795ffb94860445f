use ggez::input::keyboard::KeyCode;
use ggez::GameResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::render::Surface;

/// A point on the play area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn square(edge: i32) -> Self {
        Self { w: edge, h: edge }
    }
}

/// Heading on the grid. North is up the screen (negative y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step on the grid
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// WASD and the arrow keys both steer
    pub fn from_keycode(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::W | KeyCode::Up => Some(Direction::North),
            KeyCode::S | KeyCode::Down => Some(Direction::South),
            KeyCode::D | KeyCode::Right => Some(Direction::East),
            KeyCode::A | KeyCode::Left => Some(Direction::West),
            _ => None,
        }
    }
}

/// Behavior shared by everything that lives on the play area.
///
/// There are no default bodies: the snake head, its segments and the food each
/// spell out every operation, even when it does nothing for them.
pub trait Entity {
    fn position(&self) -> Position;

    fn size(&self) -> Size;

    /// React to a single key-down event.
    fn handle_input(&mut self, key: KeyCode);

    /// Advance by `dt` of wall time.
    fn update(&mut self, dt: Duration);

    fn draw(&self, surface: &mut dyn Surface) -> GameResult;

    /// Grid-aligned entities collide when they share a position.
    fn collides(&self, other: &dyn Entity) -> bool;
}
