use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::Monotonic;

/// Monotonic clock that only moves when told to.
///
/// Clones share the same position, so a test can keep one handle while the
/// scheduler owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }
}
