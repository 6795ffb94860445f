use ggez::event::{self, EventHandler};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{graphics, Context, GameResult};
use log::info;

use that_snake_game::render::BACKGROUND_COLOR;
use that_snake_game::{CanvasSurface, Director, GameConfig, SceneContext};

struct App {
    director: Director,
    pending_keys: Vec<KeyCode>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        App {
            director: Director::new(SceneContext::from_config(config)),
            pending_keys: Vec::new(),
        }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta();
        let keys = std::mem::take(&mut self.pending_keys);

        if !self.director.update(&keys, dt)? {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        {
            let mut surface = CanvasSurface::new(ctx, &mut canvas);
            self.director.draw(&mut surface)?;
        }
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(keycode) => self.pending_keys.push(keycode),
            None => {}
        }
        Ok(())
    }

    // Both Escape and closing the window end up here
    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("Quitting from {:?}", self.director.current_kind());
        self.director.end_scene()?;
        Ok(false)
    }
}

fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let window_setup = ggez::conf::WindowSetup::default()
        .title(&config.window_title)
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.width as f32, config.height as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("that_snake_game", "that_snake_game")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new(config);
    event::run(ctx, event_loop, app)
}
