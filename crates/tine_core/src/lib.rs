//! Tine Core - mesh, texture and image collaborators of the rasterizer.
//!
//! This crate provides:
//!
//! - **Model**: triangle mesh read from a Wavefront OBJ subset
//! - **Image**: RGBA pixel storage with TGA load/save and vertical flip
//! - **Texture**: nearest-texel sampling by normalized coordinates
//!
//! # Example
//!
//! ```ignore
//! use tine_core::{Model, Texture};
//!
//! let model = Model::load("obj/african_head.obj")?;
//! let texture = Texture::load("obj/african_head_diffuse.tga")?;
//! println!("{}", model.summary());
//! ```

pub mod color;
pub mod image_buffer;
pub mod model;
pub mod texture;

// Re-export commonly used types
pub use color::Color;
pub use image_buffer::{Image, ImageError, ImageResult};
pub use model::{Face, Model, ModelError, ModelResult};
pub use texture::Texture;
