//! Canvas 2d context adapter

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::InitializationError;
use crate::surface::{Color, RenderSurface};

/// [`RenderSurface`] backed by a browser `CanvasRenderingContext2d`.
///
/// Extents are captured at construction; the toy does not resize its canvas.
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2dSurface {
    /// Acquire the 2d context from a canvas element. Fails if the context is
    /// missing (canvas already bound to another context type) or unusable.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, InitializationError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| InitializationError::UnusableSurface(format!("{err:?}")))?
            .ok_or(InitializationError::MissingSurface)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                InitializationError::UnusableSurface("element returned a non-2d context".into())
            })?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl RenderSurface for Canvas2dSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        // Only fails on negative radius, which construction already rejects.
        let _ = self.ctx.arc(
            x as f64,
            y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}
