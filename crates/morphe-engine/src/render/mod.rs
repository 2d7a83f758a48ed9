//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and records into
//! the frame's encoder through a [`RenderTarget`].
//!
//! Convention:
//! - world space is right-handed, +Y up
//! - the [`Camera`] supplies view-projection; models supply their own transform

mod camera;
mod ctx;
pub mod shapes;

pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
