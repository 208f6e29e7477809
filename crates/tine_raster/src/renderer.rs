//! Per-face render loop.
//!
//! For each face of a [`Model`], in file order:
//! - Orthographic projection of world coordinates in [-1, 1] to the pixel grid
//! - Flat lighting from the face normal and a directional light
//! - Back-face culling when the light intensity is not positive
//! - Depth-tested, textured triangle fill
//!
//! The image is drawn with its origin at the bottom-left; flip it before
//! writing to a top-down file format.

use tine_core::{Color, Image, Model, Texture};
use tine_math::{Vec3, Vec3f};

use crate::{draw_line, fill_triangle, DepthBuffer};

/// What to draw for each face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Lit, textured, depth-tested triangles.
    Textured,
    /// Triangle edges in one color. No lighting, culling or depth test.
    Wireframe { color: Color },
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Direction front faces must point toward to be lit, used as-is
    /// (not normalized). Intensity is `normal . light_dir` with the normal
    /// `(w2 - w0) x (w1 - w0)`, so the default `(0, 0, -1)` lights faces
    /// whose normal points to -z.
    pub light_dir: Vec3f,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            light_dir: Vec3::new(0.0, 0.0, -1.0),
            mode: RenderMode::Textured,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_light_dir(mut self, light_dir: Vec3f) -> Self {
        self.light_dir = light_dir;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Counters collected over one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces handed to the rasterizer
    pub faces_drawn: usize,
    /// Faces skipped because they face away from the light
    pub faces_culled: usize,
    /// Faces skipped because their world-space normal has zero length
    pub faces_degenerate: usize,
    /// Pixel writes (depth-test passes, or line pixels in wireframe mode)
    pub pixels_written: usize,
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Rendered pixels, bottom-left origin
    pub image: Image,
    /// Final depth of every pixel
    pub depth: DepthBuffer,
    pub stats: RenderStats,
}

/// Renders models into fresh images with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Map a world position to a screen point.
    ///
    /// x and y go from [-1, 1] to [0, width] and [0, height] and are
    /// truncated to the pixel grid. z passes through unchanged as depth.
    pub fn project(&self, world: Vec3f) -> Vec3f {
        let x = ((world.x + 1.0) * self.config.width as f32 / 2.0) as i32;
        let y = ((world.y + 1.0) * self.config.height as f32 / 2.0) as i32;
        Vec3::new(x as f32, y as f32, world.z)
    }

    /// Flat-shading intensity of a world-space triangle.
    ///
    /// The normal is `(w2 - w0) x (w1 - w0)`, normalized, dotted with the
    /// light direction. Returns `None` if the triangle has no normal.
    pub fn face_intensity(&self, world: &[Vec3f; 3]) -> Option<f32> {
        let normal = (world[2] - world[0]).cross(world[1] - world[0]);
        if normal.norm() == 0.0 {
            return None;
        }
        Some(normal.normalized().dot(self.config.light_dir))
    }

    /// Render every face of `model` into a new frame.
    pub fn render(&self, model: &Model, texture: &Texture) -> Frame {
        let mut image = Image::filled(self.config.width, self.config.height, Color::BLACK);
        let mut depth = DepthBuffer::new(self.config.width, self.config.height);
        let stats = self.render_into(model, texture, &mut image, &mut depth);
        Frame { image, depth, stats }
    }

    /// Render every face of `model` into existing buffers.
    ///
    /// `image` and `depth` must both have the configured size.
    pub fn render_into(
        &self,
        model: &Model,
        texture: &Texture,
        image: &mut Image,
        depth: &mut DepthBuffer,
    ) -> RenderStats {
        let mut stats = RenderStats::default();

        for f in 0..model.face_count() {
            let world = model.face_positions(f);
            let screen = world.map(|w| self.project(w));

            match self.config.mode {
                RenderMode::Textured => {
                    let Some(intensity) = self.face_intensity(&world) else {
                        log::trace!("Face {f} has a zero-length normal, skipping");
                        stats.faces_degenerate += 1;
                        continue;
                    };
                    if intensity <= 0.0 {
                        stats.faces_culled += 1;
                        continue;
                    }

                    let uvs = model.face_uvs(f);
                    stats.pixels_written +=
                        fill_triangle(image, &screen, depth, texture, &uvs, intensity);
                    stats.faces_drawn += 1;
                }
                RenderMode::Wireframe { color } => {
                    for i in 0..3 {
                        let a = screen[i];
                        let b = screen[(i + 1) % 3];
                        stats.pixels_written +=
                            draw_line(image, a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
                    }
                    stats.faces_drawn += 1;
                }
            }
        }

        log::info!(
            "Rendered {} faces ({} culled, {} degenerate), {} pixels written",
            stats.faces_drawn,
            stats.faces_culled,
            stats.faces_degenerate,
            stats.pixels_written
        );

        stats
    }
}
