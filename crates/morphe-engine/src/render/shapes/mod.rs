//! Shape renderers.

mod common;

pub mod points;
