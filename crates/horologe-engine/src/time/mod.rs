//! Time subsystem.
//!
//! Two kinds of clocks live here:
//! - wall-clock sources producing `ClockTime` snapshots for the face
//! - monotonic sources driving the redraw scheduler
//!
//! Both are traits so tests can pin or step time without sleeping.

mod clock_time;
mod monotonic;
mod source;

#[cfg(any(test, feature = "testing"))]
mod manual_clock;

pub use clock_time::ClockTime;
pub use monotonic::{Monotonic, SystemMonotonic};
pub use source::{FixedClock, LocalClock, TimeSource};

#[cfg(any(test, feature = "testing"))]
pub use manual_clock::ManualClock;
