//! GPU rendering.
//!
//! Views write geometry into the [`Batcher`] owned by the [`SpriteRenderer`];
//! the renderer uploads it once per frame and replays it channel by channel.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader maps it to NDC through the active [`Camera`].

pub mod batch;
mod camera;
mod ctx;
mod sprite;
mod texture;
mod vertex;

pub use batch::{
    BatchState, Batcher, DrawChannel, DrawSink, DrawStats, Flushed, CHANNEL_VERTEX_CAPACITY,
};
pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::SpriteRenderer;
pub use texture::{Pixels, TextureError, TextureId, TextureOptions};
pub use vertex::Vertex;
