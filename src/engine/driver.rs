//! Self-rescheduling frame driver
//!
//! The scheduling primitive ([`FrameScheduler`]) fires a callback exactly
//! once per request, so the driver re-requests itself at the end of every
//! frame: shared state behind `Rc<RefCell<..>>`, a cooperative cancel flag
//! checked at the top of each frame. `stop()` lets an in-flight tick finish
//! and suppresses the next request.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::Engine;
use crate::surface::RenderSurface;

/// Consumed scheduling capability: invoke `callback` exactly once,
/// asynchronously, before the next repaint. Not a recurring subscription;
/// the driver requests again each tick.
pub trait FrameScheduler {
    fn request_frame(&mut self, callback: Box<dyn FnOnce()>);
}

/// Cloneable stop handle for a running driver.
#[derive(Clone)]
pub struct Controller {
    running: Rc<Cell<bool>>,
}

impl Controller {
    /// Cooperative cancel: the in-flight tick finishes, no further frames
    /// are requested.
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

struct DriverInner<S, F> {
    engine: Rc<RefCell<Engine>>,
    surface: RefCell<S>,
    scheduler: RefCell<F>,
    running: Rc<Cell<bool>>,
}

/// Continuous frame-callback cycle around an [`Engine`].
///
/// The driver is the session controller returned by
/// [`create_animation_engine`](crate::engine::create_animation_engine):
/// `start()` requests the first frame, each frame runs one tick and requests
/// the next, `stop()` cancels the cycle.
pub struct AnimationDriver<S, F> {
    inner: Rc<DriverInner<S, F>>,
}

impl<S, F> AnimationDriver<S, F>
where
    S: RenderSurface + 'static,
    F: FrameScheduler + 'static,
{
    pub fn new(engine: Engine, surface: S, scheduler: F) -> Self {
        Self {
            inner: Rc::new(DriverInner {
                engine: Rc::new(RefCell::new(engine)),
                surface: RefCell::new(surface),
                scheduler: RefCell::new(scheduler),
                running: Rc::new(Cell::new(false)),
            }),
        }
    }

    /// Shared handle to the engine, for wiring input handlers.
    pub fn engine(&self) -> Rc<RefCell<Engine>> {
        self.inner.engine.clone()
    }

    /// Detached stop handle.
    pub fn controller(&self) -> Controller {
        Controller {
            running: self.inner.running.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Request the first frame. No-op if already running.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);
        Self::schedule(self.inner.clone());
    }

    /// Stop the cycle; equivalent to `controller().stop()`.
    pub fn stop(&self) {
        self.inner.running.set(false);
    }

    fn schedule(inner: Rc<DriverInner<S, F>>) {
        let next = inner.clone();
        inner
            .scheduler
            .borrow_mut()
            .request_frame(Box::new(move || Self::frame(next)));
    }

    fn frame(inner: Rc<DriverInner<S, F>>) {
        if !inner.running.get() {
            return;
        }

        let report = inner
            .engine
            .borrow_mut()
            .tick(&mut *inner.surface.borrow_mut());

        if report.halt {
            log::info!("all entities stopped; halting frame requests");
            inner.running.set(false);
            return;
        }
        Self::schedule(inner);
    }
}

/// Synchronous scheduler fake: queues callbacks and runs them on demand,
/// with no real timing. Drives the loop in tests and the headless demo.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<Box<dyn FnOnce()>>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queued frame callbacks not yet run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run up to `n` queued callbacks; returns how many actually ran. Each
    /// callback may queue a successor, so `run(n)` advances a running driver
    /// by `n` frames.
    pub fn run(&self, n: usize) -> usize {
        let mut ran = 0;
        for _ in 0..n {
            let Some(callback) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            callback();
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}
