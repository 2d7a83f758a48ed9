//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//!
//! [`create_gpu`] is the renderer factory: a window handle plus optional
//! parameter overrides yields a ready [`Gpu`].

mod context;
mod error;
mod frame;
mod init;
mod surface;

use anyhow::Result;
use winit::window::Window;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::{GpuInit, GpuOverrides};

/// Creates a GPU context bound to `window`.
///
/// Defaults from [`GpuInit::default`] are used for every parameter that
/// `overrides` leaves unset.
pub async fn create_gpu(window: &Window, overrides: Option<GpuOverrides>) -> Result<Gpu<'_>> {
    let init = GpuInit::default().with_overrides(overrides.unwrap_or_default());
    Gpu::new(window, init).await
}
