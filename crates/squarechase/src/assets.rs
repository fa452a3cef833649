use std::path::Path;

use squarechase_engine::paint::Color;
use squarechase_engine::render::{Pixels, RenderCtx, SpriteRenderer, TextureId, TextureOptions};

/// Side of the generated fallback texture, in texels.
const FALLBACK_SIZE: u32 = 32;
const FALLBACK_BORDER: u32 = 3;
const BORDER_COLOR: Color = Color::rgb(0x30, 0x30, 0x30);

/// Loads the square texture from `path`, or generates one if that fails.
pub fn load_square_texture(
    renderer: &mut SpriteRenderer,
    ctx: &RenderCtx<'_>,
    path: &Path,
) -> TextureId {
    match renderer.load_texture(ctx, path, TextureOptions::default()) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("{}: {err}; using a generated square", path.display());
            let pixels = bordered_square(FALLBACK_SIZE, FALLBACK_BORDER);
            renderer.create_texture_from_pixels(ctx, &pixels, TextureOptions::default())
        }
    }
}

/// White `size`×`size` square with a dark `border` texels wide.
///
/// Vertex colors tint the white interior; the border stays dark.
pub fn bordered_square(size: u32, border: u32) -> Pixels {
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let edge = x < border || y < border || x >= size - border || y >= size - border;
            let c = if edge { BORDER_COLOR } else { Color::WHITE };
            rgba.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    Pixels {
        width: size,
        height: size,
        rgba,
    }
}
