//! Circumcircle, incircle, orthocenter and nine-point circle.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Matrix2;

use super::Triangle;
use crate::ellipse::Circle;
use crate::error::DegenerateGeometryError;
use crate::point::{angle_between, distance, midpoint, Point, Vec2};
use crate::shape::Shape;

impl Triangle {
    /// Point equidistant from all three vertices.
    ///
    /// Subtracting `|X−A|² = R²` from `|X−B|² = R²` and `|X−C|² = R²` leaves
    /// two linear equations in `Y = X − A`:
    ///   2 (B−A)·Y = |B−A|²
    ///   2 (C−A)·Y = |C−A|²
    fn circumcenter(&self) -> Result<Point, DegenerateGeometryError> {
        self.check_nondegenerate()?;
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let m = Matrix2::new(ab.x, ab.y, ac.x, ac.y) * 2.0;
        let rhs = Vec2::new(ab.norm_squared(), ac.norm_squared());
        let minv = m
            .try_inverse()
            .ok_or(DegenerateGeometryError::CollinearVertices)?;
        Ok(self.a + minv * rhs)
    }

    /// Circle through the three vertices.
    pub fn circumscribed_circle(&self) -> Result<Circle, DegenerateGeometryError> {
        let o = self.circumcenter()?;
        Ok(Circle::new(o, distance(&o, &self.a)))
    }

    /// Circle tangent to the three sides.
    ///
    /// The bisector from B meets AC at B1 with `|AB1|/|B1C| = |AB|/|BC|`; the
    /// bisector from A then cuts B1B at the incenter O with
    /// `|B1O|/|OB| = |AB1|/|AB|`. Radius is `area / semiperimeter`.
    pub fn inscribed_circle(&self) -> Result<Circle, DegenerateGeometryError> {
        self.check_nondegenerate()?;
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let (abl, bcl, acl) = (ab.norm(), distance(&self.b, &self.c), ac.norm());

        let ab1 = ac * (abl / (abl + bcl));
        let ab1l = ab1.norm();
        let b1b = ab - ab1;
        let b1o = b1b * (ab1l / (ab1l + abl));
        let center = self.a + ab1 + b1o;

        let s = (abl + bcl + acl) / 2.0;
        Ok(Circle::new(center, self.area() / s))
    }

    /// Intersection of the altitudes.
    ///
    /// With B1 the foot of the altitude from B (on AC) and A1 the foot from A
    /// (on BC), H lies on line AA1 at distance `|AB1| / cos∠(AA1, AC)` from A,
    /// on the A1 side when the angle at A is acute and opposite otherwise.
    pub fn orthocenter(&self) -> Result<Point, DegenerateGeometryError> {
        self.check_nondegenerate()?;
        let ab = self.b - self.a;
        let bc = self.c - self.b;
        let ac = self.c - self.a;
        let (abl2, bcl2, acl2) = (ab.norm_squared(), bc.norm_squared(), ac.norm_squared());

        let ab1 = ac * ((abl2 - bcl2 + acl2) / (2.0 * acl2));
        let ba1 = bc * ((abl2 - acl2 + bcl2) / (2.0 * bcl2));
        let aa1 = ab + ba1;
        let aa1l = aa1.norm();

        let cos_alt = aa1l / acl2.sqrt();
        let ahl = ab1.norm() / cos_alt;
        let sign = if angle_between(&ac, &ab)? < FRAC_PI_2 {
            1.0
        } else {
            -1.0
        };
        Ok(self.a + aa1 * (sign * ahl / aa1l))
    }

    /// Circle through the side midpoints and the altitude feet.
    pub fn nine_points_circle(&self) -> Result<Circle, DegenerateGeometryError> {
        let center = midpoint(&self.orthocenter()?, &self.circumcenter()?);
        let radius = distance(&midpoint(&self.a, &self.c), &center);
        Ok(Circle::new(center, radius))
    }
}
