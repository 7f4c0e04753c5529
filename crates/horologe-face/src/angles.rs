//! Hand angles.
//!
//! Angles are radians in screen space (+Y down), measured from the +X axis, so
//! 12 o'clock is `-PI / 2` and angles grow clockwise.

use horologe_engine::time::ClockTime;

/// Degrees swept by the hour hand per hour.
pub const DEGREES_PER_HOUR: f64 = 30.0;
/// Degrees swept by the minute and second hands per unit.
pub const DEGREES_PER_MINUTE: f64 = 6.0;
/// Rotation from the +X axis to 12 o'clock.
pub const TWELVE_OCLOCK_DEGREES: f64 = -90.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: ClockTime) -> Self {
        Self {
            hour: hour_angle(time.hour12(), time.minute()),
            minute: minute_angle(time.minute(), time.second()),
            second: second_angle(time.second(), time.millisecond()),
        }
    }
}

/// `hour` is on the 12-hour dial; larger values are reduced mod 12.
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    let hours = (hour % 12) as f64 + minute as f64 / 60.0;
    dial_radians(hours * DEGREES_PER_HOUR)
}

pub fn minute_angle(minute: u32, second: u32) -> f32 {
    let minutes = minute as f64 + second as f64 / 60.0;
    dial_radians(minutes * DEGREES_PER_MINUTE)
}

pub fn second_angle(second: u32, millisecond: u32) -> f32 {
    let seconds = second as f64 + millisecond as f64 / 1000.0;
    dial_radians(seconds * DEGREES_PER_MINUTE)
}

/// Converts clockwise degrees from 12 o'clock into screen-space radians.
#[inline]
pub fn dial_radians(degrees_from_twelve: f64) -> f32 {
    (degrees_from_twelve + TWELVE_OCLOCK_DEGREES).to_radians() as f32
}
