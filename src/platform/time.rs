//! Monotonic time sources
//!
//! Simulation pacing (Thief dwell timers, spawn intervals) reads time through
//! the [`Clock`] trait so tests and headless runs can substitute a manual clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source, measured from the clock's own origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Shared clock handle (the simulation is single-threaded)
pub type SharedClock = Rc<dyn Clock>;

/// Wall-clock time since construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared manual clock
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time; never moves backwards
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
