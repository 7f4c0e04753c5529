//! Coordinate and geometry types shared across the engine and clock faces.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Because +Y points down, an angle of `-PI / 2` points to the top of the
//! viewport and angles grow clockwise on screen.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
