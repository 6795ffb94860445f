use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::entity::Position;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the play area in pixels
    pub width: i32,
    /// Height of the play area in pixels
    pub height: i32,
    /// Edge length of one grid cell; also the snake's step size
    pub cell: i32,
    /// Where the snake's head starts
    pub spawn: Position,

    // Pacing
    /// Seconds between grid steps at the start of a game
    pub initial_move_interval: f64,
    /// Factor applied to the move interval on every speed-up
    pub speed_up_factor: f64,
    /// Seconds between passive score ticks
    pub score_interval_secs: f64,

    /// Where the score board is kept
    pub scores_path: PathBuf,
    /// Seed for food placement; entropy when unset
    pub seed: Option<u64>,
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            cell: 50,
            spawn: Position::new(400, 400),
            initial_move_interval: 0.2,
            speed_up_factor: 0.99,
            score_interval_secs: 3.0,
            scores_path: PathBuf::from("scores.json"),
            seed: None,
            window_title: String::from("That Snake Game"),
        }
    }
}

impl GameConfig {
    /// Deterministic configuration, handy for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Largest legal x coordinate for anything on the grid
    pub fn max_x(&self) -> i32 {
        self.width - self.cell
    }

    /// Largest legal y coordinate for anything on the grid
    pub fn max_y(&self) -> i32 {
        self.height - self.cell
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    pub fn score_interval(&self) -> Duration {
        Duration::from_secs_f64(self.score_interval_secs)
    }
}
