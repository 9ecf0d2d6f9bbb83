//! Entity model: drawable, movable shapes
//!
//! An [`Entity`] is one unit of visual state: a [`Shape`] variant (block or
//! circle), a registry-assigned id, and a [`Motion`] describing its per-frame
//! step. The [`Drawable`] and [`Movable`] capability traits are the seams the
//! tick loop works through; `Shape` dispatches them over its variants.

pub mod block;
pub mod circle;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use block::Block;
pub use circle::Circle;

use crate::error::FrameError;
use crate::surface::{Bounds, RenderSurface};

/// Registry-assigned entity identifier, used when reporting frame errors.
pub type EntityId = u32;

/// Capability: paint yourself onto a surface.
///
/// Drawing must not mutate the entity; two draws with no intervening advance
/// produce identical surface state.
pub trait Drawable {
    fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FrameError>;
}

/// Capability: apply one per-frame step.
pub trait Movable {
    /// Advance by one step within `bounds`. Returns whether the position
    /// actually changed.
    fn advance(&mut self, bounds: Bounds) -> bool;
}

/// Motion state for the bounded variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
    #[default]
    Moving,
    /// Terminal: reached a surface edge in bounded mode.
    Stopped,
}

/// Per-frame motion policy: a fixed step vector, optionally halting at the
/// surface edge the step is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Pixels moved per tick.
    pub step: Vec2,
    /// Halt at the surface edge instead of moving off-surface forever.
    pub bounded: bool,
    pub state: MotionState,
}

impl Motion {
    pub fn unbounded(step: Vec2) -> Self {
        Self {
            step,
            bounded: false,
            state: MotionState::Moving,
        }
    }

    pub fn bounded(step: Vec2) -> Self {
        Self {
            step,
            bounded: true,
            state: MotionState::Moving,
        }
    }

    /// Apply one step to `pos`. The step that lands on or over the boundary
    /// still counts as movement; only subsequent steps are suppressed.
    fn advance(&mut self, pos: &mut Vec2, bounds: Bounds) -> bool {
        if self.state == MotionState::Stopped || self.step == Vec2::ZERO {
            return false;
        }
        *pos += self.step;
        if self.bounded && self.crossed_edge(*pos, bounds) {
            self.state = MotionState::Stopped;
        }
        true
    }

    /// Edge check against the direction of motion: a downward mover stops at
    /// the bottom edge, a leftward mover at x = 0, and so on.
    fn crossed_edge(&self, pos: Vec2, bounds: Bounds) -> bool {
        (self.step.y > 0.0 && pos.y >= bounds.height)
            || (self.step.y < 0.0 && pos.y <= 0.0)
            || (self.step.x > 0.0 && pos.x >= bounds.width)
            || (self.step.x < 0.0 && pos.x <= 0.0)
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::unbounded(crate::consts::DEFAULT_MOVE_STEP)
    }
}

/// Shape variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Block(Block),
    Circle(Circle),
}

impl Shape {
    pub fn pos(&self) -> Vec2 {
        match self {
            Shape::Block(b) => b.pos,
            Shape::Circle(c) => c.pos,
        }
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        match self {
            Shape::Block(b) => &mut b.pos,
            Shape::Circle(c) => &mut c.pos,
        }
    }
}

impl Drawable for Shape {
    fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FrameError> {
        match self {
            Shape::Block(b) => b.draw(surface),
            Shape::Circle(c) => c.draw(surface),
        }
    }
}

/// A drawable, movable unit of visual state.
///
/// The id is 0 until the entity is appended to a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub(crate) id: EntityId,
    pub shape: Shape,
    pub motion: Motion,
}

impl Entity {
    pub fn new(shape: Shape, motion: Motion) -> Self {
        Self { id: 0, shape, motion }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.shape.pos()
    }

    pub fn is_stopped(&self) -> bool {
        self.motion.state == MotionState::Stopped
    }
}

impl Drawable for Entity {
    fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), FrameError> {
        self.shape.draw(surface)
    }
}

impl Movable for Entity {
    fn advance(&mut self, bounds: Bounds) -> bool {
        self.motion.advance(self.shape.pos_mut(), bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds { width: 300.0, height: 250.0 };

    fn falling_block(x: f32, y: f32) -> Entity {
        Entity::new(
            Shape::Block(Block::new(x, y, 10.0, 10.0, Color::Blue).unwrap()),
            Motion::unbounded(Vec2::new(0.0, 1.0)),
        )
    }

    #[test]
    fn test_advance_applies_step() {
        let mut entity = falling_block(10.0, 50.0);
        assert!(entity.advance(BOUNDS));
        assert_eq!(entity.pos(), Vec2::new(10.0, 51.0));
    }

    #[test]
    fn test_bounded_leftward_mover_stops_at_zero() {
        let start_x = BOUNDS.width - 20.0;
        let mut entity = Entity::new(
            Shape::Block(Block::new(start_x, 100.0, 10.0, 10.0, Color::Chartreuse).unwrap()),
            Motion::bounded(Vec2::new(-1.0, 0.0)),
        );

        let mut moved_ticks = 0u32;
        for _ in 0..(BOUNDS.width as u32 + 50) {
            if entity.advance(BOUNDS) {
                moved_ticks += 1;
            }
        }

        assert_eq!(moved_ticks, start_x as u32);
        assert!(entity.is_stopped());
        assert_eq!(entity.pos().x, 0.0);
    }

    #[test]
    fn test_stopped_entity_ignores_advance() {
        let mut entity = Entity::new(
            Shape::Block(Block::new(10.0, BOUNDS.height - 1.0, 10.0, 10.0, Color::Red).unwrap()),
            Motion::bounded(Vec2::new(0.0, 1.0)),
        );
        assert!(entity.advance(BOUNDS));
        assert!(entity.is_stopped());

        let resting = entity.pos();
        assert!(!entity.advance(BOUNDS));
        assert_eq!(entity.pos(), resting);
    }

    #[test]
    fn test_unbounded_entity_keeps_moving_off_surface() {
        let mut entity = falling_block(10.0, BOUNDS.height - 2.0);
        for _ in 0..10 {
            assert!(entity.advance(BOUNDS));
        }
        assert!(!entity.is_stopped());
        assert_eq!(entity.pos().y, BOUNDS.height + 8.0);
    }

    #[test]
    fn test_zero_step_never_moves() {
        let mut entity = Entity::new(
            Shape::Block(Block::new(10.0, 50.0, 10.0, 10.0, Color::Blue).unwrap()),
            Motion::unbounded(Vec2::ZERO),
        );
        assert!(!entity.advance(BOUNDS));
        assert_eq!(entity.pos(), Vec2::new(10.0, 50.0));
    }

    proptest! {
        /// Unbounded motion is exactly p0 + k * step after k ticks.
        #[test]
        fn prop_motion_monotonic(
            k in 1u32..200,
            step_x in -3.0f32..3.0,
            step_y in 0.25f32..3.0,
        ) {
            let p0 = Vec2::new(50.0, 20.0);
            let step = Vec2::new(step_x, step_y);
            let mut entity = Entity::new(
                Shape::Block(Block::new(p0.x, p0.y, 10.0, 10.0, Color::Blue).unwrap()),
                Motion::unbounded(step),
            );
            for _ in 0..k {
                entity.advance(BOUNDS);
            }
            let expected = p0 + step * k as f32;
            // Accumulated f32 rounding over k additions stays well under this.
            prop_assert!((entity.pos() - expected).length() < 1e-2);
        }
    }
}
