use sticky_header::{Dom, Error, StickyHeader, StickyHeaderOptions};

use crate::Interval;

/// A framework-neutral driver that owns a `sticky_header::StickyHeader` and its polling timer.
///
/// This type does not hold any UI objects or real timers. Adapters drive it by calling:
/// - `on_scroll()` for every scroll notification
/// - `tick(now_ms)` from any frame/timer callback; the debounced evaluation runs on the
///   configured `poll_interval_ms` cadence, and only when a scroll happened in between
///
/// Once `dispose()` is called both subscriptions are released and every call becomes a no-op.
#[derive(Debug)]
pub struct Driver<D: Dom> {
    engine: StickyHeader<D>,
    interval: Interval,
    disposed: bool,
}

impl<D: Dom> Driver<D> {
    /// Builds the engine and starts the polling cadence at `now_ms`.
    pub fn new(dom: D, options: StickyHeaderOptions, now_ms: u64) -> Result<Self, Error> {
        let engine = StickyHeader::new(dom, options)?;
        Ok(Self::from_engine(engine, now_ms))
    }

    pub fn from_engine(engine: StickyHeader<D>, now_ms: u64) -> Self {
        let interval = Interval::new(engine.options().poll_interval_ms, now_ms);
        Self {
            engine,
            interval,
            disposed: false,
        }
    }

    pub fn engine(&self) -> &StickyHeader<D> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StickyHeader<D> {
        &mut self.engine
    }

    pub fn into_engine(self) -> StickyHeader<D> {
        self.engine
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Forwards a scroll notification to the engine.
    pub fn on_scroll(&mut self) {
        if self.disposed {
            return;
        }
        self.engine.on_scroll_tick();
    }

    /// Advances the polling timer.
    ///
    /// Returns `true` when the debounced evaluation ran on this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.disposed || !self.interval.due(now_ms) {
            return false;
        }
        self.engine.poll()
    }

    /// Releases the scroll subscription and the polling timer.
    ///
    /// The engine keeps its last state and stays readable through [`Driver::engine`].
    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}
