//! 8-bit RGBA color.

use bytemuck::{Pod, Zeroable};

/// RGBA color, one byte per channel.
///
/// The rasterizer treats this as an opaque 4-tuple it can scale; channel
/// order only matters when converting to and from encoded images.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply the color channels by `intensity`, leaving alpha alone.
    ///
    /// No clamping is applied to `intensity`; the float-to-byte cast
    /// saturates, so values above 1 top out at 255 and negatives at 0.
    pub fn scale_rgb(self, intensity: f32) -> Self {
        Self {
            r: (self.r as f32 * intensity) as u8,
            g: (self.g as f32 * intensity) as u8,
            b: (self.b as f32 * intensity) as u8,
            a: self.a,
        }
    }

    /// Same color with full alpha.
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        bytemuck::cast(self)
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        bytemuck::cast(bytes)
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Color::from(pixel.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_bytes())
    }
}
