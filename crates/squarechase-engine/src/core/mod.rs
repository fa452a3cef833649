//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and input state; once per frame it hands
//! the application a [`FrameCtx`] borrowing all of them.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
