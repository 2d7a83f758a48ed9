//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into `InputEvent`s via
//! `platform::winit` and feeds pointer moves to a per-window `MouseTracker`.

mod frame;
mod mouse;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use mouse::{MouseConfig, MouseTracker};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseWheelDelta,
    PointerMoveEvent,
};
