//! Diffuse texture lookup for the rasterizer.
//!
//! Provides nearest-texel sampling with affine, truncating coordinate
//! conversion. Out-of-range coordinates read the nearest edge texel.

use std::path::Path;

use tine_math::Vec2f;

use crate::{Color, Image, ImageResult};

/// A read-only texture image.
///
/// Row 0 is the bottom of the texture, so `v = 0` samples the bottom edge.
#[derive(Clone, Debug)]
pub struct Texture {
    image: Image,
}

impl Texture {
    /// Wrap an image whose row 0 is already the bottom row.
    pub fn new(image: Image) -> Self {
        Self { image }
    }

    /// Create a solid color texture (1x1).
    pub fn solid_color(color: Color) -> Self {
        Self {
            image: Image::filled(1, 1, color),
        }
    }

    /// Load a texture from file and flip it so row 0 is the bottom row.
    pub fn load(path: impl AsRef<Path>) -> ImageResult<Self> {
        let mut image = Image::load(path)?;
        image.flip_vertically();
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Integer texel index for a texture coordinate.
    ///
    /// Scales by the texture size and truncates. The result is clamped into
    /// the texture, so coordinates slightly outside [0, 1] (from
    /// interpolation rounding) read the edge texel instead of failing.
    pub fn texel_index(&self, uv: Vec2f) -> (i32, i32) {
        let max_x = self.width().saturating_sub(1) as i32;
        let max_y = self.height().saturating_sub(1) as i32;
        let x = (uv.u() * self.width() as f32) as i32;
        let y = (uv.v() * self.height() as f32) as i32;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }

    /// Nearest-texel sample at a texture coordinate.
    pub fn sample(&self, uv: Vec2f) -> Color {
        let (x, y) = self.texel_index(uv);
        self.image.get(x, y)
    }
}
