//! Error taxonomy for the animation engine
//!
//! Construction and initialization errors propagate synchronously to the
//! caller. Per-frame entity failures are isolated inside the tick: the
//! offending entity is skipped and logged, the loop keeps running.

use thiserror::Error;

/// Rejected entity geometry at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstructionError {
    #[error("block width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("block height must be positive, got {0}")]
    NonPositiveHeight(f32),
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("entity geometry must be finite")]
    NonFinite,
}

/// Fatal startup failure: the render surface is missing or unusable.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("render surface handle is missing")]
    MissingSurface,
    #[error("render surface is unusable: {0}")]
    UnusableSurface(String),
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Per-entity failure during a tick. The tick logs it with the offending
/// entity's id and moves on; it never aborts the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("non-finite geometry")]
    NonFiniteGeometry,
}
