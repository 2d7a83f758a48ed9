//! Coordinate types shared across engine renderers and input.
//!
//! Canonical CPU space for pointer input:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! `ndc` converts logical pixels into normalized device coordinates
//! (+Y up, both axes in `[-1, 1]`).

mod units;
mod vec2;
mod viewport;

pub use units::{px_to_rem, rem_to_px, DEFAULT_BASE_FONT_SIZE};
pub use vec2::Vec2;
pub use viewport::Viewport;
