//! Scene state machine.
//!
//! Exactly one [`Scene`] is current at a time. Each scene reacts to input and
//! updates by handing back a [`Transition`]: stay, move to another scene, or
//! end the program.
//!
//! ```text
//!   Title ──Enter──> Rules ──Enter──> Game ──death──> GameOver
//!                                      ^                 │
//!                                      └─────Enter───────┘
//! ```

use ggez::input::keyboard::KeyCode;
use ggez::GameResult;
use std::fmt;
use std::time::Duration;

use crate::config::GameConfig;
use crate::render::Surface;
use crate::scores::{JsonScoreFile, ScoreStore};

mod game;
mod game_over;
mod rules;
mod title;

pub use game::GameScene;
pub use game_over::GameOverScene;
pub use rules::RulesScene;
pub use title::TitleScene;

/// State shared by every scene for the lifetime of the program
pub struct SceneContext {
    pub config: GameConfig,
    pub scores: Box<dyn ScoreStore>,
}

impl SceneContext {
    pub fn new(config: GameConfig, scores: Box<dyn ScoreStore>) -> Self {
        Self { config, scores }
    }

    /// Scores go to the JSON file named in the config
    pub fn from_config(config: GameConfig) -> Self {
        let scores = Box::new(JsonScoreFile::new(config.scores_path.clone()));
        Self::new(config, scores)
    }
}

/// What the current scene wants to happen after this tick
pub enum Transition {
    Continue,
    To(Scene),
    Terminate,
}

impl Transition {
    pub fn is_continue(&self) -> bool {
        matches!(self, Transition::Continue)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Continue => write!(f, "Continue"),
            Transition::To(scene) => write!(f, "To({:?})", scene.kind()),
            Transition::Terminate => write!(f, "Terminate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Title,
    Rules,
    Game,
    GameOver,
}

pub enum Scene {
    Title(TitleScene),
    Rules(RulesScene),
    Game(GameScene),
    GameOver(GameOverScene),
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Title(_) => SceneKind::Title,
            Scene::Rules(_) => SceneKind::Rules,
            Scene::Game(_) => SceneKind::Game,
            Scene::GameOver(_) => SceneKind::GameOver,
        }
    }

    pub fn handle_input(&mut self, ctx: &SceneContext, keys: &[KeyCode]) -> GameResult<Transition> {
        match self {
            Scene::Title(scene) => Ok(scene.handle_input(keys)),
            Scene::Rules(scene) => Ok(scene.handle_input(ctx, keys)),
            Scene::Game(scene) => Ok(scene.handle_input(keys)),
            Scene::GameOver(scene) => scene.handle_input(ctx, keys),
        }
    }

    pub fn update(&mut self, ctx: &SceneContext, dt: Duration) -> GameResult<Transition> {
        match self {
            Scene::Title(scene) => {
                scene.update(dt);
                Ok(Transition::Continue)
            }
            Scene::Rules(_) | Scene::GameOver(_) => Ok(Transition::Continue),
            Scene::Game(scene) => scene.update(ctx, dt),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        match self {
            Scene::Title(scene) => scene.draw(surface),
            Scene::Rules(scene) => scene.draw(surface),
            Scene::Game(scene) => scene.draw(surface),
            Scene::GameOver(scene) => scene.draw(surface),
        }
    }

    /// Wind the scene down for program exit. Scores still pending are saved.
    pub fn end_scene(&mut self, ctx: &SceneContext) -> GameResult<Transition> {
        if let Scene::GameOver(scene) = self {
            scene.persist(ctx)?;
        }
        Ok(Transition::Terminate)
    }
}

fn pressed_enter(keys: &[KeyCode]) -> bool {
    keys.contains(&KeyCode::Return)
}
