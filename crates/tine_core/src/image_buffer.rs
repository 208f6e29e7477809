//! Pixel storage with TGA load/save.
//!
//! `Image` wraps an [`image::RgbaImage`] and exposes the small pixel API
//! the rasterizer needs. Row 0 is whatever the caller decides; the renderer
//! draws with a bottom-left origin and flips once before saving, because
//! encoded images store the top row first.

use std::path::Path;

use image::{imageops, DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::Color;

/// Errors that can occur when creating, reading or writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

pub type ImageResult<T> = Result<T, ImageError>;

/// A 2D grid of [`Color`] samples.
#[derive(Clone, Debug)]
pub struct Image {
    buffer: RgbaImage,
}

impl Image {
    /// Create an image filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    /// Create an image filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    /// Build an image from row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> ImageResult<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(pixels);
        let buffer = RgbaImage::from_raw(width, height, bytes.to_vec())
            .ok_or(ImageError::InvalidDimensions { width, height })?;
        Ok(Self { buffer })
    }

    /// Read an image file. The format is picked from the extension.
    pub fn load(path: impl AsRef<Path>) -> ImageResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)?;
        let buffer = decoded.to_rgba8();

        log::debug!(
            "Loaded image: {} ({}x{})",
            path.display(),
            buffer.width(),
            buffer.height()
        );

        Ok(Self { buffer })
    }

    /// Write the image as a 24-bit RGB TGA file. Alpha is dropped.
    pub fn save_tga(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        let rgb = DynamicImage::ImageRgba8(self.buffer.clone()).to_rgb8();
        rgb.save_with_format(path, ImageFormat::Tga)?;
        log::debug!("Wrote {}x{} TGA to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Color at (x, y), or transparent black outside the image.
    pub fn get(&self, x: i32, y: i32) -> Color {
        if !self.contains(x, y) {
            return Color::default();
        }
        self.pixels()[x as usize + y as usize * self.width() as usize]
    }

    /// Set the pixel at (x, y). Writes outside the image are ignored and
    /// return `false`.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.buffer.put_pixel(x as u32, y as u32, color.into());
        true
    }

    /// Like [`Image::set`] but reports writes outside the image.
    pub fn try_set(&mut self, x: i32, y: i32, color: Color) -> ImageResult<()> {
        if self.set(x, y, color) {
            Ok(())
        } else {
            Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Mirror the image top-to-bottom.
    pub fn flip_vertically(&mut self) {
        imageops::flip_vertical_in_place(&mut self.buffer);
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Color] {
        bytemuck::cast_slice(self.buffer.as_raw())
    }
}
