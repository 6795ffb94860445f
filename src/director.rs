use ggez::input::keyboard::KeyCode;
use ggez::GameResult;
use log::{debug, info};
use std::time::Duration;

use crate::render::Surface;
use crate::scene::{Scene, SceneContext, SceneKind, TitleScene, Transition};

/// Owns the current scene and moves between scenes.
///
/// One tick is `update` (input, then scene update, then transition) followed
/// by `draw`. Once a scene asks to terminate the director is finished and
/// ignores further ticks.
pub struct Director {
    current: Scene,
    context: SceneContext,
    finished: bool,
}

impl Director {
    pub fn new(context: SceneContext) -> Self {
        Self::with_scene(context, Scene::Title(TitleScene::new()))
    }

    pub fn with_scene(context: SceneContext, scene: Scene) -> Self {
        info!("Starting in {:?}", scene.kind());
        Self {
            current: scene,
            context,
            finished: false,
        }
    }

    pub fn current(&self) -> &Scene {
        &self.current
    }

    pub fn current_kind(&self) -> SceneKind {
        self.current.kind()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one tick. Returns `false` once the program should stop.
    pub fn update(&mut self, keys: &[KeyCode], dt: Duration) -> GameResult<bool> {
        if self.finished {
            return Ok(false);
        }

        let mut next = self.current.handle_input(&self.context, keys)?;
        let after_update = self.current.update(&self.context, dt)?;
        if !after_update.is_continue() {
            next = after_update;
        }

        self.apply(next);
        Ok(!self.finished)
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        self.current.draw(surface)
    }

    /// Shut the current scene down for program exit. Safe to call more than once;
    /// only the first call reaches the scene.
    pub fn end_scene(&mut self) -> GameResult {
        if self.finished {
            return Ok(());
        }
        let next = self.current.end_scene(&self.context)?;
        self.apply(next);
        Ok(())
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Continue => {}
            Transition::To(scene) => {
                info!("Scene {:?} -> {:?}", self.current.kind(), scene.kind());
                self.current = scene;
            }
            Transition::Terminate => {
                debug!("Scene {:?} terminated", self.current.kind());
                self.finished = true;
            }
        }
    }
}
