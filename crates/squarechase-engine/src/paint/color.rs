/// Straight-alpha RGBA color with 8 bits per channel.
///
/// This is the color stored in every vertex. The GPU sees it as `Unorm8x4`, so
/// the packed layout puts red in the lowest byte:
///
/// ```text
/// bits  0..8   r
/// bits  8..16  g
/// bits 16..24  b
/// bits 24..32  a
/// ```
///
/// Blending is configured for straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs the channels into the vertex color word.
    #[inline]
    pub const fn pack(self) -> u32 {
        (self.r as u32) | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.a as u32) << 24
    }

    /// Inverse of [`pack`](Self::pack).
    #[inline]
    pub const fn unpack(packed: u32) -> Self {
        Self {
            r: packed as u8,
            g: (packed >> 8) as u8,
            b: (packed >> 16) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Normalized `[r, g, b, a]` in `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> u32 {
        c.pack()
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> wgpu::Color {
        let [r, g, b, a] = c.to_f32();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_puts_red_in_low_byte() {
        assert_eq!(Color::RED.pack(), 0xFF00_00FF);
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).pack(), 0x4433_2211);
    }

    #[test]
    fn unpack_inverts_pack() {
        let c = Color::rgba(0x99, 0xBB, 0xFF, 0x80);
        assert_eq!(Color::unpack(c.pack()), c);
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::default().pack(), u32::MAX);
    }

    #[test]
    fn to_f32_normalizes() {
        assert_eq!(Color::TRANSPARENT.to_f32(), [0.0; 4]);
        assert_eq!(Color::CYAN.to_f32(), [0.0, 1.0, 1.0, 1.0]);
    }
}
