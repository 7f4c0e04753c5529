//! Paint model shared between clock faces and hosts.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - line stroke caps
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Stroke end style for line primitives.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    /// Line ends flush at its endpoints.
    #[default]
    Butt,
    /// Line ends in a half-disc of diameter `width`.
    Round,
    /// Line extends by `width / 2` past its endpoints.
    Square,
}
