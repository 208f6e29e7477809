//! Small fixed-size vectors used by the rasterizer.
//!
//! `Vec2<T>` and `Vec3<T>` are plain value types generic over a [`Scalar`]
//! (`i32` for pixel-grid coordinates, `f32` for everything else). Every
//! operation returns a new value; nothing mutates in place.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Numeric component type of a vector.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Convert from `f32`. Integer scalars truncate toward zero.
    fn from_f32(value: f32) -> Self;

    fn to_f32(self) -> f32;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn from_f32(value: f32) -> Self {
        value as i32
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

/// 2D vector. Also used for texture coordinates (`u`, `v`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// 3D vector. Also used for screen points, where `z` carries depth.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vec2f = Vec2<f32>;
pub type Vec2i = Vec2<i32>;
pub type Vec3f = Vec3<f32>;

impl<T: Scalar> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Texture-coordinate alias for `x`.
    #[inline]
    pub fn u(&self) -> T {
        self.x
    }

    /// Texture-coordinate alias for `y`.
    #[inline]
    pub fn v(&self) -> T {
        self.y
    }

    /// Multiply every component by a float, converting back to `T`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(
            T::from_f32(self.x.to_f32() * factor),
            T::from_f32(self.y.to_f32() * factor),
        )
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Apply `f` to every component.
    pub fn map<U: Scalar>(self, f: impl Fn(T) -> U) -> Vec2<U> {
        Vec2::new(f(self.x), f(self.y))
    }
}

impl<T: Scalar> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Color-channel alias for `x`.
    #[inline]
    pub fn r(&self) -> T {
        self.x
    }

    /// Color-channel alias for `y`.
    #[inline]
    pub fn g(&self) -> T {
        self.y
    }

    /// Color-channel alias for `z`.
    #[inline]
    pub fn b(&self) -> T {
        self.z
    }

    /// Multiply every component by a float, converting back to `T`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(
            T::from_f32(self.x.to_f32() * factor),
            T::from_f32(self.y.to_f32() * factor),
            T::from_f32(self.z.to_f32() * factor),
        )
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn norm(self) -> f32 {
        self.dot(self).to_f32().sqrt()
    }

    /// Drop `z`.
    pub fn xy(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Apply `f` to every component.
    pub fn map<U: Scalar>(self, f: impl Fn(T) -> U) -> Vec3<U> {
        Vec3::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Vec3<f32> {
    pub const ZERO: Vec3f = Vec3::new(0.0, 0.0, 0.0);

    /// Unit-length copy of this vector.
    ///
    /// The vector must have non-zero length. A zero vector yields NaN
    /// components; callers are expected to reject degenerate input first.
    pub fn normalized(self) -> Self {
        self.normalized_to(1.0)
    }

    /// Copy of this vector rescaled to `length`. Same precondition as
    /// [`Vec3::normalized`].
    pub fn normalized_to(self, length: f32) -> Self {
        self.scale(length / self.norm())
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> Mul<f32> for Vec2<T> {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        self.scale(factor)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> Mul<f32> for Vec3<T> {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        self.scale(factor)
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_vec3_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 1e-6);

        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_integer_vectors() {
        let a = Vec3::new(1, 0, 0);
        let b = Vec3::new(0, 1, 0);
        assert_eq!(a.cross(b), Vec3::new(0, 0, 1));
        assert_eq!(Vec2i::new(3, 4).dot(Vec2i::new(2, 1)), 10);

        // Float scaling truncates toward zero for integer vectors
        assert_eq!(Vec2i::new(5, -5) * 0.5, Vec2i::new(2, -2));
    }

    #[test]
    fn test_norm_and_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.norm() - 5.0).abs() < 1e-6);

        let n = v.normalized();
        assert!((n.norm() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);

        let l = v.normalized_to(10.0);
        assert!((l.norm() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let n = Vec3f::ZERO.normalized();
        assert!(!n.x.is_finite());
    }

    #[test]
    fn test_aliases_and_index() {
        let uv = Vec2::new(0.25, 0.75);
        assert_eq!(uv.u(), 0.25);
        assert_eq!(uv.v(), 0.75);

        let c = Vec3::new(10, 20, 30);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
        assert_eq!(c[2], 30);
        assert_eq!(c.xy(), Vec2::new(10, 20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
