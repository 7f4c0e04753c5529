//! Analog clock faces built on `horologe-engine`.
//!
//! - [`FaceStyle`] is the immutable per-variant configuration
//! - [`angles`] and [`geometry`] hold the pure trigonometry
//! - [`ClockFaceRenderer`] records one frame into a `DrawList`
//! - [`ClockView`] binds a renderer to the redraw scheduler across attach/detach

pub mod angles;
pub mod geometry;

mod painter;
mod renderer;
mod style;
mod view;

pub use angles::HandAngles;
pub use geometry::{FaceLayout, Segment};
pub use painter::Painter;
pub use renderer::ClockFaceRenderer;
pub use style::{
    DialStyle, FaceStyle, FaceVariant, HandStyle, LabelOverride, LabelStyle, LineStyle,
    ParseVariantError,
};
pub use view::ClockView;
