//! Paint model shared between the studio and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - the named theme palette

pub mod color;
pub mod theme;

pub use color::Color;
pub use theme::{Theme, ThemeEntry};
