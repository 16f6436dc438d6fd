use std::cell::Cell;
use std::rc::Rc;

pub use web_time::{Duration, Instant};

/// Source of "now" for timers and gesture timing.
///
/// Controllers hold an `Rc<dyn Clock>` instead of calling `Instant::now()` so
/// tests can drive time deterministically with [`ManualClock`].
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(t: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(t)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

pub fn system_clock() -> Rc<dyn Clock> {
    Rc::new(SystemClock)
}
