//! Tine Raster - software triangle rasterization.
//!
//! Draws a textured, flat-lit triangle mesh into a pixel buffer on the CPU:
//! Bresenham lines, barycentric triangle fill with a depth buffer, and a
//! per-face render loop with back-face culling.
//!
//! Everything runs on the calling thread. A pass owns its image and depth
//! buffer exclusively until it returns.

mod depth;
mod line;
mod renderer;
mod triangle;

pub use depth::DepthBuffer;
pub use line::draw_line;
pub use renderer::{Frame, RenderConfig, RenderMode, RenderStats, Renderer};
pub use triangle::{barycentric, fill_triangle, fill_triangle_flat, DEGENERATE_AREA};

/// Re-export the collaborator and math types used in the public API
pub use tine_core::{Color, Image, Model, Texture};
pub use tine_math::{Vec2f, Vec2i, Vec3f};
