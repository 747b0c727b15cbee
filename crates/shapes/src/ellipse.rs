//! Ellipses given by two foci and a periapsis distance; circles as the
//! coincident-foci case.
//!
//! With `d = |F1 F2|` and periapsis `per`:
//! - semi-major `a = d/2 + per`
//! - semi-minor `b = sqrt(((2a)² − d²) / 4)`
//!
//! `Circle` wraps an `Ellipse` and replaces the approximations with the
//! exact closed forms.

use std::f64::consts::PI;

use crate::point::{distance, midpoint, Point, PointExt};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    focus_a: Point,
    focus_b: Point,
    per: f64,
}

impl Ellipse {
    /// `per` is stored as `|per|`.
    pub fn new(focus_a: Point, focus_b: Point, per: f64) -> Self {
        Self {
            focus_a,
            focus_b,
            per: per.abs(),
        }
    }

    pub fn foci(&self) -> [Point; 2] {
        [self.focus_a, self.focus_b]
    }

    /// Periapsis distance.
    pub fn periapsis(&self) -> f64 {
        self.per
    }

    /// Half the distance between the foci.
    pub fn focal_distance(&self) -> f64 {
        distance(&self.focus_a, &self.focus_b) / 2.0
    }

    pub fn major_semi_axis(&self) -> f64 {
        self.semi_axes().0
    }

    pub fn minor_semi_axis(&self) -> f64 {
        self.semi_axes().1
    }

    /// `focal_distance / major_semi_axis`, in `[0, 1)`; NaN when both are zero.
    pub fn eccentricity(&self) -> f64 {
        self.focal_distance() / self.major_semi_axis()
    }

    fn semi_axes(&self) -> (f64, f64) {
        let dist = distance(&self.focus_a, &self.focus_b);
        let a = dist / 2.0 + self.per;
        let major = 2.0 * a;
        let b = ((major * major - dist * dist) / 4.0).sqrt();
        (a, b)
    }
}

impl Shape for Ellipse {
    fn center(&self) -> Point {
        midpoint(&self.focus_a, &self.focus_b)
    }

    /// Ramanujan's approximation `4(πab + (a−b)²)/(a+b)`.
    fn perimeter(&self) -> f64 {
        let (a, b) = self.semi_axes();
        if a + b == 0.0 {
            return 0.0;
        }
        4.0 * (PI * a * b + (a - b).powi(2)) / (a + b)
    }

    fn area(&self) -> f64 {
        let (a, b) = self.semi_axes();
        PI * a * b
    }

    fn translate(&mut self, new_center: Point) {
        let shift = new_center - self.center();
        self.focus_a += shift;
        self.focus_b += shift;
    }

    fn rotate(&mut self, angle: f64) {
        let c = self.center();
        self.focus_a = self.focus_a.rotate_about(&c, angle);
        self.focus_b = self.focus_b.rotate_about(&c, angle);
    }

    fn scale(&mut self, coefficient: f64) {
        let c = self.center();
        self.focus_a = c + (self.focus_a - c) * coefficient;
        self.focus_b = c + (self.focus_b - c) * coefficient;
        self.per = (self.per * coefficient).abs();
    }
}

/// A circle: an ellipse whose foci both sit at the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle(Ellipse);

impl Circle {
    /// `radius` is stored as `|radius|`.
    pub fn new(center: Point, radius: f64) -> Self {
        Self(Ellipse::new(center, center, radius))
    }

    pub fn radius(&self) -> f64 {
        self.0.per
    }

    pub fn as_ellipse(&self) -> &Ellipse {
        &self.0
    }

    pub fn focal_distance(&self) -> f64 {
        0.0
    }

    pub fn eccentricity(&self) -> f64 {
        0.0
    }

    pub fn major_semi_axis(&self) -> f64 {
        self.0.per
    }

    pub fn minor_semi_axis(&self) -> f64 {
        self.0.per
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Self {
        c.0
    }
}

impl Shape for Circle {
    fn center(&self) -> Point {
        self.0.focus_a
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    fn translate(&mut self, new_center: Point) {
        self.0.translate(new_center);
    }

    fn rotate(&mut self, angle: f64) {
        self.0.rotate(angle);
    }

    fn scale(&mut self, coefficient: f64) {
        self.0.scale(coefficient);
    }
}
