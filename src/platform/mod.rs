//! Browser platform layer (wasm32 only)
//!
//! Adapts the DOM onto the core's traits: the canvas 2d context becomes a
//! [`RenderSurface`](crate::surface::RenderSurface), `requestAnimationFrame`
//! becomes a [`FrameScheduler`](crate::engine::driver::FrameScheduler), and
//! click events feed [`input::dispatch`](crate::input::dispatch). Nothing in
//! here contains engine logic.

mod browser;
mod canvas;

pub use browser::{BrowserScheduler, run};
pub use canvas::Canvas2dSurface;
