use std::time::Instant;

/// Monotonic time used for scheduling deadlines.
pub trait Monotonic {
    fn now(&self) -> Instant;
}

/// `std::time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMonotonic;

impl Monotonic for SystemMonotonic {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
