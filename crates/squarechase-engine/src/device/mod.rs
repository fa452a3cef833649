//! wgpu device and window surface.
//!
//! [`Gpu`] creates the instance/adapter/device/queue, keeps the surface
//! configured across resizes and hands out one [`GpuFrame`] per redraw.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
