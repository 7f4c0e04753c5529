//! Horologe engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by clock faces: geometry
//! types, colors, the draw-command stream, font metrics, time sources and the
//! redraw scheduler.

pub mod time;
pub mod schedule;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
