//! Color model shared between views and the renderer.

mod color;

pub use color::Color;
