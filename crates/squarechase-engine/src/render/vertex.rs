use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Vertex consumed by the sprite pipeline.
///
/// Layout (20 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  uv     [f32; 2]   loc 1
///  offset 16  color  u32        loc 2 (Unorm8x4, see `Color::pack`)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Unorm8x4   // color
    ];

    #[inline]
    pub fn new(pos: Vec2, uv: Vec2, color: Color) -> Self {
        Self {
            pos: pos.to_array(),
            uv: uv.to_array(),
            color: color.pack(),
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            pos: [0.0; 2],
            uv: [0.0; 2],
            color: Color::WHITE.pack(),
        }
    }
}
