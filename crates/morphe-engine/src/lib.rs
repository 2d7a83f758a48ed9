//! Morphe engine crate.
//!
//! This crate owns the platform + GPU runtime pieces, the point-shape geometry,
//! and the styling palette used by the studio.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod render;
pub mod paint;
