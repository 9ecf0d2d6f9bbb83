//! pixel-rain entry point
//!
//! On wasm32 this hands off to the browser bootstrap. The native build runs
//! a short headless demo of the same engine against a recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    pixel_rain::platform::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pixel_rain::engine::driver::ManualScheduler;
    use pixel_rain::engine::{EngineConfig, create_animation_engine};
    use pixel_rain::entity::{Block, Entity, Shape};
    use pixel_rain::input::{self, PointerEvent, SurfaceOffset};
    use pixel_rain::surface::{Color, RecordingSurface};

    env_logger::init();
    log::info!("pixel-rain (native) starting headless demo");

    let mut config = EngineConfig {
        seed: 42,
        ..Default::default()
    };
    let motion = config.motion();
    config.seed_entities = vec![
        Entity::new(
            Shape::Block(Block::new(10.0, 50.0, 10.0, 10.0, Color::Blue).expect("demo block")),
            motion,
        ),
        Entity::new(
            Shape::Block(Block::new(10.0, 100.0, 10.0, 10.0, Color::Red).expect("demo block")),
            motion,
        ),
    ];

    let surface = RecordingSurface::new(300.0, 250.0);
    let scheduler = ManualScheduler::new();
    let driver = create_animation_engine(surface, scheduler.clone(), config)
        .expect("engine initialization");
    let engine = driver.engine();
    driver.start();

    // Simulate a click a third of the way through the run.
    scheduler.run(40);
    let click = PointerEvent { client_x: 150.0, client_y: 110.0 };
    input::dispatch(&mut engine.borrow_mut(), click, SurfaceOffset::default())
        .expect("spawn from click");
    scheduler.run(80);

    driver.stop();
    scheduler.run(1);

    let engine = engine.borrow();
    log::info!(
        "ran {} ticks with {} entities",
        engine.ticks(),
        engine.registry().len()
    );
    for entity in engine.registry().iter() {
        let pos = entity.pos();
        log::info!("entity {} at ({:.0}, {:.0})", entity.id(), pos.x, pos.y);
    }
}
