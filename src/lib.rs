//! That Snake Game
//!
//! The simulation core of a scene-driven snake game:
//! - Entities (snake head, body segments, food) behind the [`entity::Entity`] contract
//! - The scene state machine (Title, Rules, Game, GameOver) and its [`director::Director`]
//! - Score board persistence through a [`scores::ScoreStore`]
//!
//! Nothing in here owns a window. Drawing goes through [`render::Surface`] and
//! time is passed in explicitly, so the whole game can be stepped from tests.

pub mod config;
pub mod director;
pub mod entity;
pub mod error;
pub mod food;
pub mod render;
pub mod scene;
pub mod scores;
pub mod snake;

pub use config::GameConfig;
pub use director::Director;
pub use entity::{Direction, Entity, Position, Size};
pub use error::ScoreError;
pub use food::Food;
pub use render::{CanvasSurface, Surface, TextAnchor};
pub use scene::{Scene, SceneContext, SceneKind, Transition};
pub use scores::{JsonScoreFile, MemoryScoreStore, ScoreBoard, ScoreRecord, ScoreStore};
pub use snake::{Segment, Snake};
