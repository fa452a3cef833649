use std::ops::Range;
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::render::batch::{Batcher, DrawSink, DrawStats};
use crate::render::camera::Camera;
use crate::render::texture::{Pixels, TextureError, TextureId, TextureOptions, Textures};
use crate::render::vertex::Vertex;
use crate::render::{RenderCtx, RenderTarget};

/// Batched textured-triangle renderer.
///
/// Owns the [`Batcher`] views write into, the texture registry and the GPU
/// side (pipeline, projection uniform, growable vertex/index buffers).
/// Everything submitted between two [`draw`](Self::draw) calls is drawn in a
/// single render pass, one draw call per channel.
pub struct SpriteRenderer {
    batch: Batcher,
    textures: Textures,

    camera: Option<Camera>,
    default_camera: Camera,

    pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    projection_ubo: wgpu::Buffer,
    projection_bind_group: wgpu::BindGroup,

    buffers: GeometryBuffers,
}

impl SpriteRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("squarechase sprite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let projection_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("squarechase projection bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<ProjectionUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let texture_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("squarechase texture bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("squarechase sprite pipeline layout"),
                    bind_group_layouts: &[&projection_layout, &texture_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("squarechase sprite pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let projection_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("squarechase projection ubo"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let projection_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("squarechase projection bind group"),
            layout: &projection_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        let mut textures = Textures::default();
        let white = textures.insert(
            ctx.device,
            ctx.queue,
            &texture_layout,
            &Pixels {
                width: 1,
                height: 1,
                rgba: vec![255; 4],
            },
            TextureOptions::default(),
        );
        debug_assert_eq!(white, TextureId::WHITE);

        log::debug!("sprite renderer ready (format {:?})", ctx.surface_format);

        Self {
            batch: Batcher::new(white),
            textures,
            camera: None,
            default_camera: Camera::from_viewport(ctx.viewport),
            pipeline,
            texture_layout,
            projection_ubo,
            projection_bind_group,
            buffers: GeometryBuffers::default(),
        }
    }

    /// The batcher views submit geometry into.
    #[inline]
    pub fn batch_mut(&mut self) -> &mut Batcher {
        &mut self.batch
    }

    #[inline]
    pub fn batch(&self) -> &Batcher {
        &self.batch
    }

    // ── textures ──────────────────────────────────────────────────────────

    /// Registers raw RGBA8 pixels as a texture.
    pub fn create_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        options: TextureOptions,
    ) -> Result<TextureId, TextureError> {
        let pixels = Pixels::new(width, height, rgba)?;
        Ok(self.create_texture_from_pixels(ctx, &pixels, options))
    }

    pub fn create_texture_from_pixels(
        &mut self,
        ctx: &RenderCtx<'_>,
        pixels: &Pixels,
        options: TextureOptions,
    ) -> TextureId {
        self.textures
            .insert(ctx.device, ctx.queue, &self.texture_layout, pixels, options)
    }

    /// Decodes an image file and registers it as a texture.
    pub fn load_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        path: impl AsRef<Path>,
        options: TextureOptions,
    ) -> Result<TextureId, TextureError> {
        let path = path.as_ref();
        let pixels = Pixels::load(path)?;
        log::info!("loaded texture {} ({}x{})", path.display(), pixels.width, pixels.height);
        Ok(self.create_texture_from_pixels(ctx, &pixels, options))
    }

    /// Releases a texture. The white texture cannot be removed.
    pub fn remove_texture(&mut self, id: TextureId) -> bool {
        if id == TextureId::WHITE {
            return false;
        }
        self.textures.remove(id)
    }

    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(id).map(|t| t.size)
    }

    // ── camera ────────────────────────────────────────────────────────────

    /// Camera used for the next draw.
    #[inline]
    pub fn camera(&self) -> Camera {
        self.camera.unwrap_or(self.default_camera)
    }

    /// Camera covering the current viewport with the origin at its top-left.
    #[inline]
    pub fn default_camera(&self) -> Camera {
        self.default_camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// Goes back to the default camera.
    pub fn reset_camera(&mut self) {
        self.camera = None;
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Flushes the batcher and records everything it holds into `target`.
    ///
    /// Records nothing when neither geometry nor a clear is pending.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) -> DrawStats {
        self.default_camera = Camera::from_viewport(ctx.viewport);

        let clear = self.batch.take_clear();
        let flushed = self.batch.flush();
        if flushed.is_none() && clear.is_none() {
            return DrawStats::default();
        }

        // Uploads may reallocate buffers; finish them before the pass borrows.
        if let Some(flushed) = &flushed {
            self.buffers.upload(ctx, flushed.vertices(), flushed.indices());
        }

        let projection = ProjectionUniform {
            matrix: self.camera.unwrap_or(self.default_camera).transform(),
        };
        ctx.queue
            .write_buffer(&self.projection_ubo, 0, bytemuck::bytes_of(&projection));

        let load = match clear {
            Some(color) => wgpu::LoadOp::Clear(color.into()),
            None => wgpu::LoadOp::Load,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("squarechase sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let Some(flushed) = flushed else {
            return DrawStats::default();
        };
        let (Some(vbo), Some(ibo)) = (self.buffers.vbo.as_ref(), self.buffers.ibo.as_ref()) else {
            return DrawStats::default();
        };

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.projection_bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);

        let mut sink = PassSink {
            rpass: &mut rpass,
            textures: &self.textures,
            skipping: false,
            reported_missing: false,
        };
        flushed.issue(&mut sink)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ProjectionUniform {
    matrix: [[f32; 4]; 4],
}

/// GPU copies of the flushed vertex and index arrays.
///
/// Capacities are in elements and only ever grow.
#[derive(Default)]
struct GeometryBuffers {
    vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    ibo: Option<wgpu::Buffer>,
    index_capacity: usize,

    /// Staging copy for index arrays whose byte length is not copy-aligned.
    index_scratch: Vec<u16>,
}

impl GeometryBuffers {
    fn upload(&mut self, ctx: &RenderCtx<'_>, vertices: &[Vertex], indices: &[u16]) {
        self.ensure_vertex_capacity(ctx, vertices.len());
        self.ensure_index_capacity(ctx, indices.len());

        if let Some(vbo) = self.vbo.as_ref() {
            if !vertices.is_empty() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
            }
        }
        if let Some(ibo) = self.ibo.as_ref() {
            let bytes = padded_index_bytes(indices, &mut self.index_scratch);
            if !bytes.is_empty() {
                ctx.queue.write_buffer(ibo, 0, bytes);
            }
        }
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = grown_capacity(required);
        log::debug!("growing sprite vertex buffer to {new_cap} vertices");

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("squarechase sprite vbo"),
            size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn ensure_index_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.index_capacity && self.ibo.is_some() {
            return;
        }

        let new_cap = grown_capacity(required);
        log::debug!("growing sprite index buffer to {new_cap} indices");

        self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("squarechase sprite ibo"),
            size: (new_cap * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.index_capacity = new_cap;
    }
}

/// Element capacity for a buffer that must hold `required` elements.
///
/// Always even, so a padded index upload still fits.
fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(64)
}

/// `indices` as bytes, padded with a zero index to `COPY_BUFFER_ALIGNMENT`.
fn padded_index_bytes<'a>(indices: &'a [u16], scratch: &'a mut Vec<u16>) -> &'a [u8] {
    let bytes: &[u8] = bytemuck::cast_slice(indices);
    if bytes.len() as u64 % wgpu::COPY_BUFFER_ALIGNMENT == 0 {
        return bytes;
    }

    scratch.clear();
    scratch.extend_from_slice(indices);
    scratch.push(0);
    bytemuck::cast_slice(scratch.as_slice())
}

/// Replays a flushed batch into a render pass.
struct PassSink<'p, 'e> {
    rpass: &'p mut wgpu::RenderPass<'e>,
    textures: &'p Textures,
    /// Set while the bound texture is unknown; its draws are dropped.
    skipping: bool,
    reported_missing: bool,
}

impl DrawSink for PassSink<'_, '_> {
    fn bind_texture(&mut self, texture: TextureId) {
        match self.textures.get(texture) {
            Some(t) => {
                self.rpass.set_bind_group(1, &t.bind_group, &[]);
                self.skipping = false;
            }
            None => {
                if !self.reported_missing {
                    log::error!("draw references unknown texture {texture:?}; skipping it");
                    self.reported_missing = true;
                }
                self.skipping = true;
            }
        }
    }

    fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32) {
        if self.skipping {
            return;
        }
        self.rpass.draw_indexed(indices, base_vertex, 0..1);
    }
}
