/// One acquired swapchain image plus the encoder recording into it.
///
/// Hold it for as little as possible: while it lives the next image cannot be
/// acquired. [`Gpu::submit`](super::Gpu::submit) consumes and presents it.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
