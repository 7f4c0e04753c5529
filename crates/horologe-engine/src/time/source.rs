use chrono::Local;

use super::ClockTime;

/// Source of wall-clock time for a face.
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// System local time via `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl LocalClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&Local::now())
    }
}

/// Always reports the same time. Useful for snapshots and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_is_in_range() {
        let t = LocalClock::new().now();
        assert!(ClockTime::new(t.hour(), t.minute(), t.second(), t.millisecond()).is_some());
    }

    #[test]
    fn fixed_clock_repeats() {
        let at = ClockTime::new(3, 15, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}
