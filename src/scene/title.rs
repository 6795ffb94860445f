use ggez::graphics::Color;
use ggez::input::keyboard::KeyCode;
use ggez::mint::Point2;
use ggez::GameResult;
use std::f32::consts::TAU;
use std::time::Duration;

use super::{pressed_enter, RulesScene, Scene, Transition};
use crate::render::{Surface, TextAnchor, BACKGROUND_COLOR, TEXT_COLOR};

const TITLE: &str = "That Snake Game";
const BASE_TITLE_SIZE: f32 = 72.0;
const TITLE_PULSE: f32 = 4.0;

// Phase speeds in radians per second
const SIZE_RATE: f32 = 7.2;
const RED_RATE: f32 = 0.6;
const GREEN_RATE: f32 = 1.2;
const BLUE_RATE: f32 = 1.8;

fn channel(phase: f32) -> u8 {
    (255.0 / 2.0 * (phase.cos() + 1.0)) as u8
}

/// Opening screen with a pulsing, color-cycling title
pub struct TitleScene {
    size_phase: f32,
    red_phase: f32,
    green_phase: f32,
    blue_phase: f32,
    title_size: f32,
    title_color: Color,
}

impl TitleScene {
    pub fn new() -> Self {
        let mut scene = Self {
            size_phase: 0.0,
            red_phase: 0.0,
            green_phase: 0.0,
            blue_phase: 0.0,
            title_size: BASE_TITLE_SIZE,
            title_color: Color::BLACK,
        };
        scene.refresh();
        scene
    }

    pub fn title_size(&self) -> f32 {
        self.title_size
    }

    pub fn title_color(&self) -> Color {
        self.title_color
    }

    pub(super) fn handle_input(&mut self, keys: &[KeyCode]) -> Transition {
        if pressed_enter(keys) {
            Transition::To(Scene::Rules(RulesScene::new()))
        } else {
            Transition::Continue
        }
    }

    pub(super) fn update(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.size_phase = (self.size_phase + SIZE_RATE * secs).rem_euclid(TAU);
        self.red_phase = (self.red_phase + RED_RATE * secs).rem_euclid(TAU);
        self.green_phase = (self.green_phase + GREEN_RATE * secs).rem_euclid(TAU);
        self.blue_phase = (self.blue_phase + BLUE_RATE * secs).rem_euclid(TAU);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.title_size = BASE_TITLE_SIZE + (TITLE_PULSE * self.size_phase.cos()).trunc();
        self.title_color = Color::from_rgb(
            channel(self.red_phase),
            channel(self.green_phase),
            channel(self.blue_phase),
        );
    }

    pub(super) fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.fill(BACKGROUND_COLOR);
        let (w, h) = surface.size();
        surface.draw_text(
            TITLE,
            Point2 { x: w / 2.0, y: h / 2.0 },
            self.title_size,
            self.title_color,
            TextAnchor::Center,
        )?;
        surface.draw_text(
            "Press Enter To Continue...",
            Point2 { x: w / 2.0, y: h - 50.0 },
            24.0,
            TEXT_COLOR,
            TextAnchor::Center,
        )
    }
}

impl Default for TitleScene {
    fn default() -> Self {
        Self::new()
    }
}
