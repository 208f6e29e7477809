//! Per-pixel depth buffer.

/// Nearest-surface depth per pixel. Larger values are nearer.
///
/// Starts at negative infinity, so the first surface written to a pixel
/// always passes the test.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    depths: Vec<f32>,
}

impl DepthBuffer {
    /// Value of a pixel nothing has been drawn to.
    pub const CLEAR: f32 = f32::NEG_INFINITY;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depths: vec![Self::CLEAR; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(x as usize + y as usize * self.width as usize)
    }

    /// Stored depth at (x, y), or `CLEAR` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> f32 {
        self.index(x, y).map_or(Self::CLEAR, |i| self.depths[i])
    }

    /// Store `depth` at (x, y) if it is strictly nearer than the stored value.
    ///
    /// Returns whether the test passed. On exactly equal depth the stored
    /// value is kept, so the first surface drawn wins ties.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if self.depths[i] < depth {
            self.depths[i] = depth;
            true
        } else {
            false
        }
    }

    /// Row-major depths.
    pub fn as_slice(&self) -> &[f32] {
        &self.depths
    }

    /// Number of pixels something has been drawn to.
    pub fn covered(&self) -> usize {
        self.depths.iter().filter(|&&d| d != Self::CLEAR).count()
    }
}
