//! Tine math - vectors and screen-space bounds for the software rasterizer.

mod bounds;
mod interval;
mod vector;

pub use bounds::Bounds2;
pub use interval::Interval;
pub use vector::{Scalar, Vec2, Vec2f, Vec2i, Vec3, Vec3f};
