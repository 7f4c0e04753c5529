//! Font loading and text measurement.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{TextMeasure, TextMetrics};
