use chrono::Timelike;

/// Wall-clock time of day, sampled once per tick.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0, millisecond: 0 };

    /// Returns `None` unless `hour < 24`, `minute < 60`, `second < 60` and
    /// `millisecond < 1000`.
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 && millisecond < 1000 {
            Some(Self { hour, minute, second, millisecond })
        } else {
            None
        }
    }

    /// Builds a snapshot from any chrono time-of-day value.
    ///
    /// Leap seconds (nanoseconds past one billion) clamp to 999 ms.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
            millisecond: (t.nanosecond() / 1_000_000).min(999),
        }
    }

    #[inline]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    /// Hour on the 12-hour dial, `0..12`.
    #[inline]
    pub const fn hour12(self) -> u32 {
        self.hour % 12
    }

    #[inline]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u32 {
        self.second
    }

    #[inline]
    pub const fn millisecond(self) -> u32 {
        self.millisecond
    }
}
