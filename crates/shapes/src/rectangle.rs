//! Rectangles stored as a centerline segment plus a perpendicular width;
//! squares as the equal-sides case.
//!
//! The segment `A–B` joins the midpoints of one pair of parallel sides, so
//! `|AB|` is the first side and the width `a` is the second.

use std::f64::consts::SQRT_2;

use crate::cfg::GeomCfg;
use crate::ellipse::Circle;
use crate::error::DegenerateGeometryError;
use crate::point::{distance, midpoint, Point, PointExt, Vec2, VectorExt};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    a: Point,
    b: Point,
    width: f64,
    cfg: GeomCfg,
}

impl Rectangle {
    /// Fails when `a` and `b` coincide. `width` is stored as `|width|`.
    pub fn new(a: Point, b: Point, width: f64) -> Result<Self, DegenerateGeometryError> {
        Self::new_with_cfg(a, b, width, GeomCfg::default())
    }

    /// Like `new`, validating with `cfg` now and on every later entry check.
    pub fn new_with_cfg(
        a: Point,
        b: Point,
        width: f64,
        cfg: GeomCfg,
    ) -> Result<Self, DegenerateGeometryError> {
        check_centerline(&a, &b, cfg)?;
        Ok(Self {
            a,
            b,
            width: width.abs(),
            cfg,
        })
    }

    /// Centerline endpoints.
    pub fn centerline(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    /// The four corners: counter-clockwise for any non-vertical centerline,
    /// clockwise when `A.x == B.x`.
    ///
    /// The offset direction comes from the slope angle of `A→B`; which side
    /// is visited first flips on `B.x > A.x`. Fails if the
    /// centerline has collapsed (e.g. after `scale(0.0)`).
    pub fn vertices(&self) -> Result<[Point; 4], DegenerateGeometryError> {
        check_centerline(&self.a, &self.b, self.cfg)?;
        let ang = (self.b - self.a).slope_angle();
        let half = self.width / 2.0;
        let off = Vec2::new(half * ang.sin(), -half * ang.cos());
        let (a, b) = (self.a, self.b);
        Ok(if b.x > a.x {
            [a + off, b + off, b - off, a - off]
        } else {
            [a - off, b - off, b + off, a + off]
        })
    }

    /// Length of the centerline.
    pub fn first_side(&self) -> f64 {
        distance(&self.a, &self.b)
    }

    /// Width perpendicular to the centerline.
    pub fn second_side(&self) -> f64 {
        self.width
    }

    pub fn diagonal(&self) -> f64 {
        self.first_side().hypot(self.second_side())
    }
}

fn check_centerline(a: &Point, b: &Point, cfg: GeomCfg) -> Result<(), DegenerateGeometryError> {
    if distance(a, b) <= cfg.eps_len {
        tracing::debug!(?a, ?b, "rectangle centerline collapsed");
        return Err(DegenerateGeometryError::CoincidentPoints {
            what: "rectangle centerline",
        });
    }
    Ok(())
}

impl Shape for Rectangle {
    fn center(&self) -> Point {
        midpoint(&self.a, &self.b)
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.first_side() + self.second_side())
    }

    fn area(&self) -> f64 {
        self.first_side() * self.second_side()
    }

    fn translate(&mut self, new_center: Point) {
        let c = self.center();
        self.a = new_center + (self.a - c);
        self.b = new_center + (self.b - c);
    }

    fn rotate(&mut self, angle: f64) {
        let c = self.center();
        self.a = c + Point::from(self.a - c).rotate(angle).coords;
        self.b = c + Point::from(self.b - c).rotate(angle).coords;
    }

    fn scale(&mut self, coefficient: f64) {
        let c = self.center();
        self.a = c + (self.a - c) * coefficient;
        self.b = c + (self.b - c) * coefficient;
        self.width *= coefficient.abs();
    }
}

/// A rectangle whose width equals its centerline length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square(Rectangle);

impl Square {
    /// Fails when `a` and `b` coincide.
    pub fn new(a: Point, b: Point) -> Result<Self, DegenerateGeometryError> {
        Self::new_with_cfg(a, b, GeomCfg::default())
    }

    pub fn new_with_cfg(a: Point, b: Point, cfg: GeomCfg) -> Result<Self, DegenerateGeometryError> {
        Rectangle::new_with_cfg(a, b, distance(&a, &b), cfg).map(Self)
    }

    pub fn as_rectangle(&self) -> &Rectangle {
        &self.0
    }

    pub fn size(&self) -> f64 {
        self.0.width
    }

    pub fn side(&self) -> f64 {
        self.0.width
    }

    pub fn vertices(&self) -> Result<[Point; 4], DegenerateGeometryError> {
        self.0.vertices()
    }

    pub fn diagonal(&self) -> f64 {
        self.0.diagonal()
    }

    /// Circle through the four corners (radius `side/√2`).
    pub fn circumscribed_circle(&self) -> Circle {
        Circle::new(self.0.center(), self.side() / SQRT_2)
    }

    /// Circle tangent to the four sides (radius `side/2`).
    pub fn inscribed_circle(&self) -> Circle {
        Circle::new(self.0.center(), self.side() / 2.0)
    }
}

impl From<Square> for Rectangle {
    fn from(s: Square) -> Self {
        s.0
    }
}

impl Shape for Square {
    fn center(&self) -> Point {
        self.0.center()
    }
    fn perimeter(&self) -> f64 {
        self.0.perimeter()
    }
    fn area(&self) -> f64 {
        self.0.area()
    }
    fn translate(&mut self, new_center: Point) {
        self.0.translate(new_center)
    }
    fn rotate(&mut self, angle: f64) {
        self.0.rotate(angle)
    }
    fn scale(&mut self, coefficient: f64) {
        self.0.scale(coefficient)
    }
}
