//! Browser bootstrap: DOM lookup, event wiring, frame scheduling

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::Canvas2dSurface;
use crate::consts::CANVAS_ID;
use crate::engine::driver::FrameScheduler;
use crate::engine::{Engine, EngineConfig, create_animation_engine};
use crate::entity::{Block, Entity, Motion, Shape};
use crate::error::InitializationError;
use crate::input::{self, PointerEvent, SurfaceOffset};
use crate::surface::Color;

/// `requestAnimationFrame` adapter: fires the callback once before the next
/// repaint.
pub struct BrowserScheduler;

impl FrameScheduler for BrowserScheduler {
    fn request_frame(&mut self, callback: Box<dyn FnOnce()>) {
        let closure = Closure::once(move |_time: f64| callback());
        let window = web_sys::window().expect("no window");
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Entry point for the browser build: bind to the page canvas, seed the demo
/// entities, wire the click listener, and start the loop.
pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to init logger");

    log::info!("pixel-rain starting");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .expect("no canvas element")
        .dyn_into()
        .expect("element is not a canvas");

    let mut config = match read_config(&canvas) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; falling back to defaults");
            EngineConfig::default()
        }
    };
    if config.seed == 0 {
        config.seed = js_sys::Date::now() as u64;
    }
    if config.seed_entities.is_empty() {
        config.seed_entities = demo_seed_entities(config.motion());
    }
    log::info!("engine seed: {}", config.seed);

    let surface = Canvas2dSurface::new(&canvas).expect("canvas 2d context");
    let driver = create_animation_engine(surface, BrowserScheduler, config)
        .expect("engine initialization");

    setup_click_handler(&canvas, driver.engine());

    driver.start();
    log::info!("pixel-rain running");
    // The pending frame closure keeps the loop alive; the driver handle can
    // drop here.
}

/// Optional JSON config from the canvas `data-config` attribute.
fn read_config(canvas: &HtmlCanvasElement) -> Result<EngineConfig, InitializationError> {
    match canvas.get_attribute("data-config") {
        None => Ok(EngineConfig::default()),
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|err| InitializationError::InvalidConfig(err.to_string())),
    }
}

/// The two demo blocks shown before the first click.
fn demo_seed_entities(motion: Motion) -> Vec<Entity> {
    let upper = Block::new(10.0, 50.0, 10.0, 10.0, Color::Blue).expect("demo block");
    let lower = Block::new(10.0, 100.0, 10.0, 10.0, Color::Red).expect("demo block");
    vec![
        Entity::new(Shape::Block(upper), motion),
        Entity::new(Shape::Block(lower), motion),
    ]
}

/// One click listener on the canvas; each click spawns at the translated
/// surface-local point.
fn setup_click_handler(canvas: &HtmlCanvasElement, engine: Rc<RefCell<Engine>>) {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        let offset = SurfaceOffset {
            x: rect.left() as f32,
            y: rect.top() as f32,
        };
        let pointer = PointerEvent {
            client_x: event.client_x() as f32,
            client_y: event.client_y() as f32,
        };
        if let Err(err) = input::dispatch(&mut engine.borrow_mut(), pointer, offset) {
            log::warn!("ignoring click: {err}");
        }
    });
    let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
