//! Pointer input: coordinate translation and click-to-spawn
//!
//! The platform layer hands [`dispatch`] a raw pointer event plus the
//! surface's bounding offset; the event is translated into surface-local
//! coordinates and the configured entity variant is appended to the engine's
//! registry. No drawing happens here: the new entity first appears on the
//! next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::ConstructionError;

/// A raw pointer event in client (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
}

/// The surface's bounding offset in client coordinates, as reported by the
/// platform (`getBoundingClientRect` in the browser).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Translate to surface-local coordinates by subtracting the surface's
    /// bounding offset.
    pub fn to_surface(self, offset: SurfaceOffset) -> Vec2 {
        Vec2::new(self.client_x - offset.x, self.client_y - offset.y)
    }
}

/// Handle one pointer event: translate and spawn.
///
/// Construction failures (non-finite client coordinates) propagate to the
/// caller rather than being swallowed.
pub fn dispatch(
    engine: &mut Engine,
    event: PointerEvent,
    offset: SurfaceOffset,
) -> Result<(), ConstructionError> {
    engine.spawn_at(event.to_surface(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, EntityVariant};
    use crate::surface::RecordingSurface;

    fn engine_with(config: EngineConfig) -> Engine {
        let surface = RecordingSurface::new(300.0, 250.0);
        Engine::new(&surface, config).unwrap()
    }

    #[test]
    fn test_translation_subtracts_offset() {
        let event = PointerEvent { client_x: 120.0, client_y: 90.0 };
        let offset = SurfaceOffset { x: 40.0, y: 25.0 };
        assert_eq!(event.to_surface(offset), Vec2::new(80.0, 65.0));
    }

    #[test]
    fn test_dispatch_spawns_at_translated_point() {
        let mut engine = engine_with(EngineConfig::default());
        let event = PointerEvent { client_x: 150.0, client_y: 110.0 };
        let offset = SurfaceOffset { x: 50.0, y: 10.0 };

        dispatch(&mut engine, event, offset).unwrap();

        assert_eq!(engine.registry().len(), 1);
        let entity = engine.registry().iter().next().unwrap();
        assert_eq!(entity.pos(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_dispatch_appends_in_event_order() {
        let mut engine = engine_with(EngineConfig::default());
        let offset = SurfaceOffset::default();
        for x in [10.0, 20.0, 30.0] {
            dispatch(&mut engine, PointerEvent { client_x: x, client_y: 0.0 }, offset).unwrap();
        }

        let xs: Vec<f32> = engine.registry().iter().map(|e| e.pos().x).collect();
        assert_eq!(xs, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_dispatched_circle_uses_engine_rng() {
        let mut engine = engine_with(EngineConfig {
            entity_variant: EntityVariant::Circle,
            seed: 7,
            ..Default::default()
        });
        let event = PointerEvent { client_x: 60.0, client_y: 60.0 };
        dispatch(&mut engine, event, SurfaceOffset::default()).unwrap();
        assert_eq!(engine.registry().len(), 1);
    }

    #[test]
    fn test_dispatch_propagates_construction_errors() {
        let mut engine = engine_with(EngineConfig::default());
        let event = PointerEvent { client_x: f32::NAN, client_y: 10.0 };
        assert_eq!(
            dispatch(&mut engine, event, SurfaceOffset::default()),
            Err(ConstructionError::NonFinite)
        );
        assert!(engine.registry().is_empty());
    }
}
