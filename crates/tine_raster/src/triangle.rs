//! Triangle filling.
//!
//! [`fill_triangle`] is the main primitive: a bounding-box scan with a
//! barycentric inside test, depth buffering and affine texture mapping.
//! [`fill_triangle_flat`] is a plain scanline fill with one color and no
//! depth test.

use tine_core::{Color, Image, Texture};
use tine_math::{Bounds2, Vec2f, Vec2i, Vec3, Vec3f};

use crate::DepthBuffer;

/// Triangles whose doubled screen-space area is below this are degenerate.
pub const DEGENERATE_AREA: f32 = 1e-2;

/// Barycentric coordinates of `p` in the triangle (a, b, c).
///
/// Only x and y are used. Returns weights `(w, u, v)` for `(a, b, c)` that
/// sum to 1, with all three `>= 0` exactly when `p` is inside or on an edge.
/// Returns `None` when the triangle has (near) zero area.
pub fn barycentric(a: Vec3f, b: Vec3f, c: Vec3f, p: Vec3f) -> Option<Vec3f> {
    let pa = a - p;
    let ab = b - a;
    let ac = c - a;

    // x: twice the signed area of (a, b, c); y, z: u and v scaled by it
    let cross = Vec3::new(pa.x, ab.x, ac.x).cross(Vec3::new(pa.y, ab.y, ac.y));
    if cross.x.abs() < DEGENERATE_AREA {
        return None;
    }

    let u = cross.y / cross.x;
    let v = cross.z / cross.x;
    // 1 - u - v, computed before the division so it is exact on edges
    let w = (cross.x - cross.y - cross.z) / cross.x;
    Some(Vec3::new(w, u, v))
}

/// Fill a screen-space triangle with depth testing and texturing.
///
/// `points` are screen points: x/y on the pixel grid, z a depth where
/// larger is nearer. Each covered pixel that passes the depth test gets the
/// texture sample at the interpolated `uvs`, scaled by `intensity` and made
/// opaque. The depth is written before the color is computed.
///
/// Degenerate triangles draw nothing. Returns the number of pixels written.
pub fn fill_triangle(
    image: &mut Image,
    points: &[Vec3f; 3],
    depth: &mut DepthBuffer,
    texture: &Texture,
    uvs: &[Vec2f; 3],
    intensity: f32,
) -> usize {
    debug_assert_eq!(
        (image.width(), image.height()),
        (depth.width(), depth.height()),
        "depth buffer must match the image"
    );

    let [a, b, c] = *points;
    let depths = Vec3::new(a.z, b.z, c.z);
    let bounds = Bounds2::from_points(points)
        .clamped_to(&Bounds2::of_image(image.width(), image.height()));

    let mut written = 0;
    for (px, py) in bounds.pixels() {
        let p = Vec3::new(px as f32, py as f32, 0.0);
        let Some(bary) = barycentric(a, b, c, p) else {
            // Zero area: nothing in the box is inside
            return 0;
        };
        if bary.x < 0.0 || bary.y < 0.0 || bary.z < 0.0 {
            continue;
        }

        let z = bary.dot(depths);
        if !depth.test_and_set(px, py, z) {
            continue;
        }

        let uv = uvs[0] * bary.x + uvs[1] * bary.y + uvs[2] * bary.z;
        let color = texture.sample(uv).scale_rgb(intensity).opaque();
        image.set(px, py, color);
        written += 1;
    }

    written
}

/// Fill a triangle with one color using horizontal spans.
///
/// Vertices are sorted by y and the triangle is split at the middle vertex;
/// each scanline fills between the long edge and the current short edge,
/// both ends included. No depth test. A triangle with zero height draws
/// nothing.
pub fn fill_triangle_flat(image: &mut Image, v0: Vec2i, v1: Vec2i, v2: Vec2i, color: Color) {
    let mut v = [v0, v1, v2];
    v.sort_by_key(|p| p.y);
    let [v0, v1, v2] = v;

    let total_height = v2.y - v0.y;
    if total_height == 0 {
        return;
    }
    let lower_height = v1.y - v0.y;

    for i in 0..=total_height {
        let upper = i > lower_height || lower_height == 0;
        let segment_height = if upper { v2.y - v1.y } else { lower_height };

        let alpha = i as f32 / total_height as f32;
        let beta = (i - if upper { lower_height } else { 0 }) as f32 / segment_height as f32;

        let mut left = v0 + (v2 - v0) * alpha;
        let mut right = if upper {
            v1 + (v2 - v1) * beta
        } else {
            v0 + (v1 - v0) * beta
        };
        if left.x > right.x {
            std::mem::swap(&mut left, &mut right);
        }

        let y = v0.y + i;
        for x in left.x..=right.x {
            image.set(x, y, color);
        }
    }
}
