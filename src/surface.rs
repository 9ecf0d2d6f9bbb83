//! 2D render-surface abstraction
//!
//! The engine draws through [`RenderSurface`], a minimal subset of the
//! browser's 2d canvas context: region clear, filled/stroked rectangles, and
//! path primitives with a mutable fill-color state. The browser adapter lives
//! in `platform`; tests and the native demo use [`RecordingSurface`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Fill/stroke style descriptor.
///
/// Named variants cover the palette the toy actually uses; spawned circles
/// get arbitrary `Rgb` values from the engine's RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Pink,
    DeepPink,
    Chartreuse,
    RebeccaPurple,
    Rgb(u8, u8, u8),
}

impl Color {
    /// CSS color string understood by the canvas `fillStyle`/`strokeStyle`.
    pub fn to_css(self) -> Cow<'static, str> {
        match self {
            Color::Blue => Cow::Borrowed("blue"),
            Color::Red => Cow::Borrowed("red"),
            Color::Pink => Cow::Borrowed("pink"),
            Color::DeepPink => Cow::Borrowed("deeppink"),
            Color::Chartreuse => Cow::Borrowed("chartreuse"),
            Color::RebeccaPurple => Cow::Borrowed("rebeccapurple"),
            Color::Rgb(r, g, b) => Cow::Owned(format!("rgb({r}, {g}, {b})")),
        }
    }
}

/// Surface extents in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Consumed drawing capability.
///
/// Mirrors the 2d canvas context: a mutable fill-color state plus immediate
/// rectangle and path commands. Coordinates are pixels from the top-left
/// corner. All operations are infallible; geometry validity is the caller's
/// concern.
pub trait RenderSurface {
    /// Surface width in pixels.
    fn width(&self) -> f32;
    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Erase a rectangular region back to transparent.
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Set the fill color used by subsequent fill operations.
    fn set_fill_color(&mut self, color: Color);
    /// Paint a filled rectangle with the current fill color.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Outline a rectangle.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Add a circular arc centered at (x, y); angles in radians.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    /// Fill the current path (implicitly closes it).
    fn fill(&mut self);
    /// Stroke the current path.
    fn stroke(&mut self);
    fn close_path(&mut self);

    /// Extents as a [`Bounds`] value.
    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    ClearRegion { x: f32, y: f32, w: f32, h: f32 },
    SetFillColor(Color),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Arc { x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32 },
    Fill,
    Stroke,
    ClosePath,
}

/// Surface that records every command in call order.
///
/// Stands in for the canvas in tests and the headless demo: command order is
/// exactly paint order, so stacking assertions reduce to slice comparisons.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Recorded commands in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drop the recorded history (extents are kept).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(SurfaceOp::ClearRegion { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetFillColor(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(SurfaceOp::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(SurfaceOp::StrokeRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.ops.push(SurfaceOp::Arc { x, y, radius, start_angle, end_angle });
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }
}
