//! Randomized-radius disc entity

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Drawable;
use crate::consts::{SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN};
use crate::error::{ConstructionError, FrameError};
use crate::surface::{Color, RenderSurface};

/// A filled disc (or partial arc). `pos` is the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
    /// Arc start in radians.
    pub start_angle: f32,
    /// Arc end in radians; defaults to a full circle.
    pub end_angle: f32,
    pub color: Color,
}

impl Circle {
    /// Construct a full circle; radius must be strictly positive and finite.
    pub fn new(x: f32, y: f32, radius: f32, color: Color) -> Result<Self, ConstructionError> {
        Self::with_arc(x, y, radius, 0.0, TAU, color)
    }

    /// Construct a partial arc.
    pub fn with_arc(
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) -> Result<Self, ConstructionError> {
        if !(x.is_finite()
            && y.is_finite()
            && radius.is_finite()
            && start_angle.is_finite()
            && end_angle.is_finite())
        {
            return Err(ConstructionError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(ConstructionError::NonPositiveRadius(radius));
        }
        Ok(Self {
            pos: Vec2::new(x, y),
            radius,
            start_angle,
            end_angle,
            color,
        })
    }

    /// Circle with randomized radius and fill color, as spawned on click.
    pub fn random<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        let radius = rng.random_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX) as f32;
        let color = Color::Rgb(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        );
        Self {
            pos,
            radius,
            start_angle: 0.0,
            end_angle: TAU,
            color,
        }
    }

    fn is_finite(&self) -> bool {
        self.pos.is_finite()
            && self.radius.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
    }
}

impl Drawable for Circle {
    fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FrameError> {
        if !self.is_finite() {
            return Err(FrameError::NonFiniteGeometry);
        }
        surface.begin_path();
        surface.set_fill_color(self.color);
        surface.arc(self.pos.x, self.pos.y, self.radius, self.start_angle, self.end_angle);
        // fill() implicitly closes the path, matching the canvas contract.
        surface.fill();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_defaults_to_full_circle() {
        let circle = Circle::new(150.0, 110.0, 20.0, Color::Rgb(0, 204, 153)).unwrap();
        assert_eq!(circle.start_angle, 0.0);
        assert_eq!(circle.end_angle, TAU);
    }

    #[test]
    fn test_new_rejects_non_positive_radius() {
        assert_eq!(
            Circle::new(0.0, 0.0, 0.0, Color::Blue),
            Err(ConstructionError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            Circle::new(0.0, 0.0, -3.0, Color::Blue),
            Err(ConstructionError::NonPositiveRadius(-3.0))
        );
    }

    #[test]
    fn test_draw_emits_arc_path() {
        let circle = Circle::new(150.0, 110.0, 20.0, Color::Pink).unwrap();
        let mut surface = RecordingSurface::new(300.0, 250.0);
        circle.draw(&mut surface).unwrap();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::SetFillColor(Color::Pink),
                SurfaceOp::Arc {
                    x: 150.0,
                    y: 110.0,
                    radius: 20.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                },
                SurfaceOp::Fill,
            ]
        );
    }

    #[test]
    fn test_random_radius_in_spawn_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let circle = Circle::random(Vec2::new(50.0, 50.0), &mut rng);
            assert!(circle.radius >= SPAWN_RADIUS_MIN as f32);
            assert!(circle.radius <= SPAWN_RADIUS_MAX as f32);
        }
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        let pos = Vec2::new(30.0, 40.0);
        assert_eq!(Circle::random(pos, &mut a), Circle::random(pos, &mut b));
    }
}
