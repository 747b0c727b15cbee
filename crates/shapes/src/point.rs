//! Point and vector primitives.
//!
//! Points are `nalgebra::Point2<f64>` and directed quantities are
//! `nalgebra::Vector2<f64>`, so the arithmetic is the usual operator set:
//! - `p + v`, `p - v` → Point; `p - q` → Vector (`end - begin`);
//! - `p * k`, `p / k`, `v * k`, `v / k` → scaled copies (division by zero
//!   follows IEEE semantics).
//!
//! The extension traits add what nalgebra does not ship: rotation about a
//! pivot in polar form, the slope angle, and a checked inter-vector angle.

use nalgebra::{Point2, Vector2};

use crate::error::DegenerateGeometryError;

pub type Point = Point2<f64>;
pub type Vec2 = Vector2<f64>;

/// Extra point operations.
pub trait PointExt {
    /// Rotate counter-clockwise by `angle` radians about `pivot`.
    ///
    /// The polar angle relative to the pivot is taken with `atan2`, shifted
    /// by `angle`, and the point is rebuilt from `(distance, angle)`.
    fn rotate_about(&self, pivot: &Point, angle: f64) -> Point;
    /// Rotate about the origin.
    fn rotate(&self, angle: f64) -> Point;
    /// Distance to the origin.
    fn length(&self) -> f64;
    /// Overwrite the coordinates in place.
    fn set(&mut self, other: &Point);
}

impl PointExt for Point {
    fn rotate_about(&self, pivot: &Point, angle: f64) -> Point {
        let rel = self - pivot;
        let dist = rel.norm();
        let heading = rel.y.atan2(rel.x) + angle;
        pivot + polar(dist, heading)
    }

    #[inline]
    fn rotate(&self, angle: f64) -> Point {
        self.rotate_about(&Point::origin(), angle)
    }

    #[inline]
    fn length(&self) -> f64 {
        self.coords.norm()
    }

    #[inline]
    fn set(&mut self, other: &Point) {
        self.coords = other.coords;
    }
}

/// Midpoint of `a` and `b`.
#[inline]
pub fn midpoint(a: &Point, b: &Point) -> Point {
    nalgebra::center(a, b)
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Extra vector operations.
pub trait VectorExt {
    /// `atan(y/x)`: the slope angle, in `(-π/2, π/2)`, with no quadrant
    /// correction (opposite vectors share an angle).
    fn slope_angle(&self) -> f64;
}

impl VectorExt for Vec2 {
    #[inline]
    fn slope_angle(&self) -> f64 {
        (self.y / self.x).atan()
    }
}

/// Vector from `begin` to `end`.
#[inline]
pub fn between(begin: &Point, end: &Point) -> Vec2 {
    end - begin
}

/// Vector with the given length and direction (radians from +x).
#[inline]
pub fn polar(length: f64, angle: f64) -> Vec2 {
    Vec2::new(length * angle.cos(), length * angle.sin())
}

/// Dot product.
#[inline]
pub fn scalar_product(a: &Vec2, b: &Vec2) -> f64 {
    a.dot(b)
}

/// Signed area of the parallelogram spanned by `a` and `b`:
/// `a.x·b.y − b.x·a.y`, positive for a→b counter-clockwise.
#[inline]
pub fn vector_product(a: &Vec2, b: &Vec2) -> f64 {
    a.perp(b)
}

/// Unsigned angle between `a` and `b` in `[0, π]`.
pub fn angle_between(a: &Vec2, b: &Vec2) -> Result<f64, DegenerateGeometryError> {
    let denom = a.norm() * b.norm();
    if !denom.is_finite() || denom <= 0.0 {
        tracing::debug!(?a, ?b, "angle requested for zero-length vector");
        return Err(DegenerateGeometryError::ZeroLengthVector);
    }
    // Rounding can push the cosine a hair past ±1.
    let cos = (scalar_product(a, b) / denom).clamp(-1.0, 1.0);
    Ok(cos.acos())
}
