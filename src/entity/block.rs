//! Axis-aligned rectangle entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Drawable;
use crate::error::{ConstructionError, FrameError};
use crate::surface::{Color, RenderSurface};

/// A filled axis-aligned rectangle. `pos` is the top-left corner in surface
/// pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Block {
    /// Construct a block; width and height must be strictly positive and all
    /// geometry finite.
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<Self, ConstructionError> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(ConstructionError::NonFinite);
        }
        if width <= 0.0 {
            return Err(ConstructionError::NonPositiveWidth(width));
        }
        if height <= 0.0 {
            return Err(ConstructionError::NonPositiveHeight(height));
        }
        Ok(Self {
            pos: Vec2::new(x, y),
            width,
            height,
            color,
        })
    }

    fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl Drawable for Block {
    fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FrameError> {
        // Fields are public, so geometry can have been corrupted since
        // construction.
        if !self.is_finite() {
            return Err(FrameError::NonFiniteGeometry);
        }
        surface.set_fill_color(self.color);
        surface.fill_rect(self.pos.x, self.pos.y, self.width, self.height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        assert_eq!(
            Block::new(0.0, 0.0, 0.0, 10.0, Color::Blue),
            Err(ConstructionError::NonPositiveWidth(0.0))
        );
        assert_eq!(
            Block::new(0.0, 0.0, 10.0, -1.0, Color::Blue),
            Err(ConstructionError::NonPositiveHeight(-1.0))
        );
    }

    #[test]
    fn test_new_rejects_non_finite_geometry() {
        assert_eq!(
            Block::new(f32::NAN, 0.0, 10.0, 10.0, Color::Blue),
            Err(ConstructionError::NonFinite)
        );
        assert_eq!(
            Block::new(0.0, 0.0, f32::INFINITY, 10.0, Color::Blue),
            Err(ConstructionError::NonFinite)
        );
    }

    #[test]
    fn test_draw_emits_fill_at_current_position() {
        let block = Block::new(10.0, 50.0, 10.0, 10.0, Color::Blue).unwrap();
        let mut surface = RecordingSurface::new(300.0, 250.0);
        block.draw(&mut surface).unwrap();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::SetFillColor(Color::Blue),
                SurfaceOp::FillRect { x: 10.0, y: 50.0, w: 10.0, h: 10.0 },
            ]
        );
    }

    #[test]
    fn test_draw_is_idempotent() {
        let block = Block::new(10.0, 50.0, 10.0, 10.0, Color::Red).unwrap();

        let mut first = RecordingSurface::new(300.0, 250.0);
        block.draw(&mut first).unwrap();
        let mut second = RecordingSurface::new(300.0, 250.0);
        block.draw(&mut second).unwrap();
        block.draw(&mut second).unwrap();

        let (head, tail) = second.ops().split_at(first.ops().len());
        assert_eq!(head, first.ops());
        assert_eq!(tail, first.ops());
    }

    #[test]
    fn test_draw_fails_on_corrupted_geometry() {
        let mut block = Block::new(10.0, 50.0, 10.0, 10.0, Color::Blue).unwrap();
        block.pos.y = f32::NAN;

        let mut surface = RecordingSurface::new(300.0, 250.0);
        assert_eq!(block.draw(&mut surface), Err(FrameError::NonFiniteGeometry));
        assert!(surface.ops().is_empty());
    }

    proptest! {
        #[test]
        fn prop_non_positive_sizes_never_construct(dim in -50.0f32..=0.0) {
            prop_assert!(Block::new(0.0, 0.0, dim, 10.0, Color::Blue).is_err());
            prop_assert!(Block::new(0.0, 0.0, 10.0, dim, Color::Blue).is_err());
        }
    }
}
