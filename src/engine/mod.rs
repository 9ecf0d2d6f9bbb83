//! Per-frame engine logic
//!
//! [`Engine`] owns the registry and the spawn RNG, and advances the session
//! one [`Engine::tick`] at a time: clear the surface, draw-then-advance every
//! entity in insertion order, report whether the loop should continue. The
//! continuous scheduling cycle around it lives in [`driver`].

pub mod driver;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MOVE_STEP, SPAWN_BLOCK_COLOR, SPAWN_BLOCK_SIZE};
use crate::entity::{Block, Circle, Drawable, Entity, Motion, Movable, Shape};
use crate::error::{ConstructionError, InitializationError};
use crate::registry::Registry;
use crate::surface::RenderSurface;

use driver::{AnimationDriver, FrameScheduler};

/// Which entity kind a click spawns.
///
/// `Both` spawns a block and a circle per click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityVariant {
    #[default]
    Block,
    Circle,
    Both,
}

/// Engine configuration.
///
/// Serde-derived with per-field defaults so the browser layer can read a
/// partial JSON object from the canvas element's `data-config` attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Entity kind spawned on click.
    pub entity_variant: EntityVariant,
    /// Pixels moved per tick.
    pub move_step: Vec2,
    /// Entities halt at the surface edge instead of moving off-surface.
    pub bounded: bool,
    /// Stop requesting frames once every entity has stopped (bounded mode).
    pub halt_when_all_stopped: bool,
    /// Keep painting entities that have stopped at an edge.
    pub draw_stopped: bool,
    /// RNG seed for randomized spawns; 0 lets the platform pick one.
    pub seed: u64,
    /// Entities present before the first tick.
    pub seed_entities: Vec<Entity>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            entity_variant: EntityVariant::Block,
            move_step: DEFAULT_MOVE_STEP,
            bounded: false,
            halt_when_all_stopped: false,
            draw_stopped: true,
            seed: 0,
            seed_entities: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Motion shared by click-spawned entities (and, by convention, seeds).
    pub fn motion(&self) -> Motion {
        if self.bounded {
            Motion::bounded(self.move_step)
        } else {
            Motion::unbounded(self.move_step)
        }
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Entities drawn this tick.
    pub drawn: usize,
    /// Entities whose position changed this tick.
    pub moved: usize,
    /// Entities skipped because drawing them failed.
    pub skipped: usize,
    /// The loop should stop requesting frames.
    pub halt: bool,
}

/// The animation engine core: registry plus per-tick frame logic.
pub struct Engine {
    registry: Registry,
    config: EngineConfig,
    rng: Pcg32,
    ticks: u64,
}

impl Engine {
    /// Build an engine against a validated surface handle.
    ///
    /// Fails fast if the surface is unusable or a seed entity carries
    /// non-finite geometry.
    pub fn new<S: RenderSurface>(
        surface: &S,
        mut config: EngineConfig,
    ) -> Result<Self, InitializationError> {
        let (w, h) = (surface.width(), surface.height());
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(InitializationError::UnusableSurface(format!(
                "surface extents {w}x{h}"
            )));
        }

        let mut registry = Registry::new();
        for entity in std::mem::take(&mut config.seed_entities) {
            if !entity.pos().is_finite() {
                return Err(ConstructionError::NonFinite.into());
            }
            registry.append(entity);
        }

        let rng = Pcg32::seed_from_u64(config.seed);
        Ok(Self {
            registry,
            config,
            rng,
            ticks: 0,
        })
    }

    /// Run one frame: clear the whole surface, then draw-then-advance each
    /// entity in insertion order.
    ///
    /// Draw renders the pre-advance position; advancing afterwards prepares
    /// the next frame. A failing entity is skipped for the whole tick and
    /// logged with its id; the loop never aborts on one bad entity.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S) -> TickReport {
        surface.clear_region(0.0, 0.0, surface.width(), surface.height());
        let bounds = surface.bounds();

        let mut report = TickReport::default();
        let draw_stopped = self.config.draw_stopped;
        for entity in self.registry.iter_mut() {
            if !draw_stopped && entity.is_stopped() {
                continue;
            }
            match entity.draw(surface) {
                Ok(()) => report.drawn += 1,
                Err(err) => {
                    log::warn!("skipping entity {}: {err}", entity.id());
                    report.skipped += 1;
                    continue;
                }
            }
            if entity.advance(bounds) {
                report.moved += 1;
            }
        }

        self.ticks += 1;
        report.halt = self.config.halt_when_all_stopped && self.registry.all_stopped();
        report
    }

    /// Append the configured entity variant at a surface-local point.
    /// Called by the input dispatcher; the new entity first appears on the
    /// next tick.
    pub fn spawn_at(&mut self, point: Vec2) -> Result<(), ConstructionError> {
        if !point.is_finite() {
            return Err(ConstructionError::NonFinite);
        }
        let motion = self.config.motion();
        let variant = self.config.entity_variant;

        if matches!(variant, EntityVariant::Block | EntityVariant::Both) {
            let block = Block::new(
                point.x,
                point.y,
                SPAWN_BLOCK_SIZE,
                SPAWN_BLOCK_SIZE,
                SPAWN_BLOCK_COLOR,
            )?;
            self.registry.append(Entity::new(Shape::Block(block), motion));
        }
        if matches!(variant, EntityVariant::Circle | EntityVariant::Both) {
            let circle = Circle::random(point, &mut self.rng);
            self.registry.append(Entity::new(Shape::Circle(circle), motion));
        }
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Initialization entry point: validate the surface, seed the registry, and
/// wire the self-rescheduling driver. The returned driver is the session
/// controller (`start`/`stop`).
pub fn create_animation_engine<S, F>(
    surface: S,
    scheduler: F,
    config: EngineConfig,
) -> Result<AnimationDriver<S, F>, InitializationError>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
{
    let engine = Engine::new(&surface, config)?;
    Ok(AnimationDriver::new(engine, surface, scheduler))
}
