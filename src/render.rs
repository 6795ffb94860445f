use ggez::graphics::{self, Canvas, Color, DrawParam, Rect, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

// Colors
pub const BACKGROUND_COLOR: Color = Color::new(100.0 / 255.0, 204.0 / 255.0, 178.0 / 255.0, 1.0);
pub const SNAKE_COLOR: Color = Color::new(191.0 / 255.0, 81.0 / 255.0, 73.0 / 255.0, 1.0);
pub const FOOD_COLOR: Color = Color::new(230.0 / 255.0, 179.0 / 255.0, 41.0 / 255.0, 1.0);
pub const TEXT_COLOR: Color = Color::BLACK;

/// Where a piece of text hangs off its destination point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// The drawing primitives the game needs from whatever owns the window.
pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> (f32, f32);

    fn fill(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color) -> GameResult;

    fn draw_text(
        &mut self,
        text: &str,
        dest: Point2<f32>,
        scale: f32,
        color: Color,
        anchor: TextAnchor,
    ) -> GameResult;
}

/// [`Surface`] backed by a ggez frame canvas
pub struct CanvasSurface<'a> {
    ctx: &'a Context,
    canvas: &'a mut Canvas,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a Context, canvas: &'a mut Canvas) -> Self {
        Self { ctx, canvas }
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> (f32, f32) {
        self.ctx.gfx.drawable_size()
    }

    fn fill(&mut self, color: Color) {
        let (w, h) = self.size();
        self.canvas.draw(
            &graphics::Quad,
            DrawParam::default()
                .dest_rect(Rect::new(0.0, 0.0, w, h))
                .color(color),
        );
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> GameResult {
        let mesh = graphics::Mesh::new_rectangle(self.ctx, graphics::DrawMode::fill(), rect, color)?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        dest: Point2<f32>,
        scale: f32,
        color: Color,
        anchor: TextAnchor,
    ) -> GameResult {
        let mut text = graphics::Text::new(text);
        text.set_scale(scale);
        if anchor == TextAnchor::Center {
            text.set_layout(TextLayout::center());
        }
        self.canvas.draw(&text, DrawParam::default().dest(dest).color(color));
        Ok(())
    }
}
