//! Window + event-loop runtime.
//!
//! Owns the `winit` EventLoop, the single clock window, and the refresh
//! timer, and wires them to the GPU layer. The application sees only the
//! [`App`] contract and the per-frame [`FrameCtx`].

mod ctx;
mod event_loop;

pub use ctx::{App, AppControl, FrameCtx};
pub use event_loop::{Runtime, RuntimeConfig};
