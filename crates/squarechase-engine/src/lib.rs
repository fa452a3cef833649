//! Square Chase engine.
//!
//! Window/GPU runtime, input, timing, the view stack and the batched sprite
//! renderer the game draws through.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod view;
