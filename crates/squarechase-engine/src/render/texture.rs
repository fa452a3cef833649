use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Opaque handle to a texture registered with the sprite renderer.
///
/// Identity is the only property the batcher relies on: two handles are the
/// same texture exactly when they compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) u32);

impl TextureId {
    /// The 1×1 white texture created with every renderer; used for untextured
    /// (colored) primitives.
    pub const WHITE: TextureId = TextureId(0);
}

/// Sampling options for a texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextureOptions {
    /// Repeat outside `[0, 1]` instead of clamping to the edge.
    pub repeat: bool,
    /// Linear filtering instead of nearest.
    pub smooth: bool,
}

/// Error returned when creating or loading a texture.
#[derive(Debug)]
pub enum TextureError {
    Io(std::io::Error),
    Decode(image::ImageError),
    /// Pixel data does not match `width * height * 4` bytes.
    SizeMismatch { expected: usize, actual: usize },
    ZeroSize,
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "texture read error: {e}"),
            TextureError::Decode(e) => write!(f, "texture decode error: {e}"),
            TextureError::SizeMismatch { expected, actual } => {
                write!(f, "texture data is {actual} bytes, expected {expected}")
            }
            TextureError::ZeroSize => write!(f, "texture has zero size"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Io(e) => Some(e),
            TextureError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

/// Decoded RGBA8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Pixels {
    /// Wraps raw RGBA8 data after checking its length.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSize);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(TextureError::SizeMismatch { expected, actual: rgba.len() });
        }
        Ok(Self { width, height, rgba })
    }

    /// Decodes any image format enabled in the `image` crate features.
    pub fn decode(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }
}

/// GPU side of a registered texture.
pub(crate) struct Texture {
    #[allow(dead_code)] // keeps the storage alive for `view`
    texture: wgpu::Texture,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) size: (u32, u32),
}

/// Texture registry owned by the sprite renderer.
///
/// Handles are dense indices; `TextureId::WHITE` is always the first entry.
#[derive(Default)]
pub(crate) struct Textures {
    entries: HashMap<TextureId, Texture>,
    next: u32,
}

impl Textures {
    pub(crate) fn get(&self, id: TextureId) -> Option<&Texture> {
        self.entries.get(&id)
    }

    pub(crate) fn remove(&mut self, id: TextureId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub(crate) fn insert(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        pixels: &Pixels,
        options: TextureOptions,
    ) -> TextureId {
        let id = TextureId(self.next);
        self.next += 1;

        let size = wgpu::Extent3d {
            width: pixels.width,
            height: pixels.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("squarechase texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(pixels.width * 4),
                rows_per_image: Some(pixels.height),
            },
            size,
        );

        let address_mode = if options.repeat {
            wgpu::AddressMode::Repeat
        } else {
            wgpu::AddressMode::ClampToEdge
        };
        let filter = if options.smooth {
            wgpu::FilterMode::Linear
        } else {
            wgpu::FilterMode::Nearest
        };

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("squarechase texture sampler"),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("squarechase texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::debug!("registered texture {id:?} ({}x{})", pixels.width, pixels.height);

        self.entries.insert(
            id,
            Texture {
                texture,
                bind_group,
                size: (pixels.width, pixels.height),
            },
        );
        id
    }
}
