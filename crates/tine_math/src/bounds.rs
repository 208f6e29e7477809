use crate::{Interval, Vec3f};

/// Axis-aligned screen-space bounding box.
///
/// Defined by one [`Interval`] per axis, like a 2D slice of a 3D AABB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds2 {
    pub x: Interval,
    pub y: Interval,
}

impl Bounds2 {
    /// Create an empty box (contains nothing).
    pub fn empty() -> Self {
        Self {
            x: Interval::EMPTY,
            y: Interval::EMPTY,
        }
    }

    /// Pixel rectangle `[0, width-1] x [0, height-1]` of an image.
    pub fn of_image(width: u32, height: u32) -> Self {
        Self {
            x: Interval::new(0.0, width as f32 - 1.0),
            y: Interval::new(0.0, height as f32 - 1.0),
        }
    }

    /// Smallest box containing the x/y of every point. `z` is ignored.
    pub fn from_points(points: &[Vec3f]) -> Self {
        points.iter().fold(Self::empty(), |bounds, p| Self {
            x: bounds.x.include(p.x),
            y: bounds.y.include(p.y),
        })
    }

    /// Restrict this box to another one (usually the image rectangle).
    pub fn clamped_to(&self, limits: &Bounds2) -> Self {
        Self {
            x: self.x.intersect(&limits.x),
            y: self.y.intersect(&limits.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Every integer pixel inside the box, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> {
        let ys = self.y.integers();
        self.x
            .integers()
            .flat_map(move |px| ys.clone().map(move |py| (px, py)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_from_points() {
        let bounds = Bounds2::from_points(&[
            Vec3::new(5.0, 1.0, 0.0),
            Vec3::new(-2.0, 7.0, 3.0),
            Vec3::new(3.0, 4.0, -1.0),
        ]);
        assert_eq!(bounds.x, Interval::new(-2.0, 5.0));
        assert_eq!(bounds.y, Interval::new(1.0, 7.0));
    }

    #[test]
    fn test_clamped_to_image() {
        let bounds = Bounds2::from_points(&[
            Vec3::new(-10.0, -10.0, 0.0),
            Vec3::new(900.0, 5.0, 0.0),
        ]);
        let clamped = bounds.clamped_to(&Bounds2::of_image(800, 600));
        assert_eq!(clamped.x, Interval::new(0.0, 799.0));
        assert_eq!(clamped.y, Interval::new(0.0, 5.0));
    }

    #[test]
    fn test_offscreen_box_is_empty() {
        let bounds = Bounds2::from_points(&[
            Vec3::new(1000.0, 10.0, 0.0),
            Vec3::new(1100.0, 20.0, 0.0),
        ]);
        let clamped = bounds.clamped_to(&Bounds2::of_image(800, 800));
        assert!(clamped.is_empty());
        assert_eq!(clamped.pixels().count(), 0);
    }

    #[test]
    fn test_pixels() {
        let bounds = Bounds2::from_points(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0)]);
        let pixels: Vec<_> = bounds.pixels().collect();
        assert_eq!(pixels, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }
}
