//! pixel-rain - a falling-shapes canvas toy
//!
//! Core modules:
//! - `entity`: Drawable/movable shapes (blocks and circles) with a bounded
//!   motion state machine
//! - `registry`: Append-only entity collection; insertion order is draw order
//! - `engine`: Per-tick frame logic and the self-rescheduling animation driver
//! - `input`: Pointer-event translation and click-to-spawn
//! - `surface`: 2D render-surface abstraction (the canvas 2d context subset)
//! - `platform`: Browser bindings (wasm32 only)

pub mod engine;
pub mod entity;
pub mod error;
pub mod input;
pub mod registry;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use engine::driver::{AnimationDriver, Controller, FrameScheduler, ManualScheduler};
pub use engine::{Engine, EngineConfig, EntityVariant, TickReport, create_animation_engine};
pub use entity::{Block, Circle, Drawable, Entity, EntityId, Motion, MotionState, Movable, Shape};
pub use error::{ConstructionError, FrameError, InitializationError};
pub use input::{PointerEvent, SurfaceOffset};
pub use registry::Registry;
pub use surface::{Bounds, Color, RecordingSurface, RenderSurface};

/// Engine defaults
pub mod consts {
    use glam::Vec2;

    use crate::surface::Color;

    /// Default per-frame step: one pixel straight down.
    pub const DEFAULT_MOVE_STEP: Vec2 = Vec2::new(0.0, 1.0);

    /// Side length of click-spawned blocks.
    pub const SPAWN_BLOCK_SIZE: f32 = 10.0;
    /// Fill color of click-spawned blocks.
    pub const SPAWN_BLOCK_COLOR: Color = Color::Pink;

    /// Randomized circle spawn radius range, inclusive.
    pub const SPAWN_RADIUS_MIN: u32 = 1;
    pub const SPAWN_RADIUS_MAX: u32 = 10;

    /// Canvas element id the browser bootstrap binds to.
    pub const CANVAS_ID: &str = "game";
}
