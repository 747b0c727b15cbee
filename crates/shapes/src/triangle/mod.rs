//! Triangles and their classical centers.
//!
//! - `Triangle`: three vertices, non-collinear at construction.
//! - Metrics: centroid, perimeter, Heron area.
//! - Derived geometry (`centers`): circumcircle, incircle, orthocenter,
//!   nine-point circle. Each re-checks non-collinearity on entry because a
//!   zero scale collapses a valid triangle.

mod centers;


use crate::cfg::GeomCfg;
use crate::error::DegenerateGeometryError;
use crate::point::{distance, vector_product, Point, PointExt};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    cfg: GeomCfg,
}

impl Triangle {
    /// Fails when the vertices are collinear (including coincident ones).
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, DegenerateGeometryError> {
        Self::new_with_cfg(a, b, c, GeomCfg::default())
    }

    /// Like `new`, validating with `cfg` now and on every later entry check.
    pub fn new_with_cfg(
        a: Point,
        b: Point,
        c: Point,
        cfg: GeomCfg,
    ) -> Result<Self, DegenerateGeometryError> {
        let t = Self { a, b, c, cfg };
        t.check_nondegenerate()?;
        Ok(t)
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// `(|AB|, |BC|, |CA|)`.
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        (
            distance(&self.a, &self.b),
            distance(&self.b, &self.c),
            distance(&self.c, &self.a),
        )
    }

    /// Fails when `|AB|` or `|AC|` is within `eps_len`, or when
    /// `|AB × AC| <= eps_det · |AB|·|AC|`.
    fn check_nondegenerate(&self) -> Result<(), DegenerateGeometryError> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let (abl, acl) = (ab.norm(), ac.norm());
        let norms = abl * acl;
        let cross = vector_product(&ab, &ac).abs();
        let ok = norms.is_finite()
            && abl > self.cfg.eps_len
            && acl > self.cfg.eps_len
            && cross > self.cfg.eps_det * norms;
        if !ok {
            tracing::debug!(a = ?self.a, b = ?self.b, c = ?self.c, "collinear triangle");
            return Err(DegenerateGeometryError::CollinearVertices);
        }
        Ok(())
    }
}

impl Shape for Triangle {
    /// Centroid.
    fn center(&self) -> Point {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    fn perimeter(&self) -> f64 {
        let (ab, bc, ca) = self.side_lengths();
        ab + bc + ca
    }

    /// Heron's formula.
    fn area(&self) -> f64 {
        let (ab, bc, ca) = self.side_lengths();
        let s = (ab + bc + ca) / 2.0;
        // Rounding can leave a tiny negative product for flat triangles.
        (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
    }

    fn translate(&mut self, new_center: Point) {
        let shift = self.center() - new_center;
        self.a -= shift;
        self.b -= shift;
        self.c -= shift;
    }

    fn rotate(&mut self, angle: f64) {
        let o = self.center();
        self.a = self.a.rotate_about(&o, angle);
        self.b = self.b.rotate_about(&o, angle);
        self.c = self.c.rotate_about(&o, angle);
    }

    fn scale(&mut self, coefficient: f64) {
        let o = self.center();
        self.a = o + (self.a - o) * coefficient;
        self.b = o + (self.b - o) * coefficient;
        self.c = o + (self.c - o) * coefficient;
    }
}
