//! Property tests across every shape kind.

use std::f64::consts::{SQRT_2, TAU};

use nalgebra::point;
use proptest::prelude::*;

use crate::point::{distance, midpoint, vector_product, Point};
use crate::{Circle, Ellipse, Figure, Rectangle, Shape, Square, Triangle};

fn approx(x: f64, y: f64) -> bool {
    (x - y).abs() <= 1e-9 * (1.0 + x.abs().max(y.abs()))
}

fn defining_points(f: &Figure) -> Vec<Point> {
    match f {
        Figure::Ellipse(e) => e.foci().to_vec(),
        Figure::Circle(c) => c.as_ellipse().foci().to_vec(),
        Figure::Rectangle(r) => r.centerline().to_vec(),
        Figure::Square(s) => s.as_rectangle().centerline().to_vec(),
        Figure::Triangle(t) => t.vertices().to_vec(),
    }
}

fn coord() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

fn any_point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| point![x, y])
}

fn size() -> impl Strategy<Value = f64> {
    0.1..20.0f64
}

fn any_triangle() -> impl Strategy<Value = Triangle> {
    (any_point(), any_point(), any_point()).prop_filter_map("well-conditioned triangle", |(a, b, c)| {
        Triangle::new(a, b, c).ok().filter(|t| t.area() > 50.0)
    })
}

fn any_figure() -> impl Strategy<Value = Figure> {
    prop_oneof![
        (any_point(), any_point(), size()).prop_map(|(a, b, p)| Figure::from(Ellipse::new(a, b, p))),
        (any_point(), size()).prop_map(|(c, r)| Figure::from(Circle::new(c, r))),
        (any_point(), any_point(), size()).prop_filter_map("short centerline", |(a, b, w)| {
            (distance(&a, &b) > 0.1)
                .then(|| Rectangle::new(a, b, w).ok())
                .flatten()
                .map(Figure::from)
        }),
        (any_point(), any_point()).prop_filter_map("short centerline", |(a, b)| {
            (distance(&a, &b) > 0.1)
                .then(|| Square::new(a, b).ok())
                .flatten()
                .map(Figure::from)
        }),
        any_triangle().prop_map(Figure::from),
    ]
}

fn nonzero_coefficient() -> impl Strategy<Value = f64> {
    prop_oneof![-5.0..-0.2f64, 0.2..5.0f64]
}

proptest! {
    #[test]
    fn rotate_preserves_perimeter_and_area(f in any_figure(), angle in 0.0..TAU) {
        let g = f.rotated(angle);
        prop_assert!(approx(f.perimeter(), g.perimeter()), "{} perimeter", f.kind());
        prop_assert!(approx(f.area(), g.area()), "{} area", f.kind());
        prop_assert!((f.center() - g.center()).norm() < 1e-9);
    }

    #[test]
    fn scale_round_trip_restores_area(f in any_figure(), k in nonzero_coefficient()) {
        let scaled = f.scaled(k);
        prop_assert!(approx(scaled.area(), f.area() * k * k), "{} scaled area", f.kind());
        let back = scaled.scaled(1.0 / k);
        prop_assert!(approx(back.area(), f.area()), "{} area", f.kind());
        prop_assert!(approx(back.perimeter(), f.perimeter()), "{} perimeter", f.kind());
    }

    #[test]
    fn translate_to_own_center_is_noop(f in any_figure()) {
        let g = f.translated(f.center());
        for (p, q) in defining_points(&f).iter().zip(defining_points(&g).iter()) {
            prop_assert!((p - q).norm() < 1e-9, "{}: {:?} moved to {:?}", f.kind(), p, q);
        }
    }

    #[test]
    fn translate_moves_center_and_keeps_size(f in any_figure(), target in any_point()) {
        let g = f.translated(target);
        prop_assert!((g.center() - target).norm() < 1e-9);
        prop_assert!(approx(f.area(), g.area()));
        prop_assert!(approx(f.perimeter(), g.perimeter()));
    }

    #[test]
    fn circle_is_degenerate_ellipse(c in any_point(), r in size()) {
        let circle = Circle::new(c, r);
        let ellipse = Ellipse::new(c, c, r);
        prop_assert!(approx(circle.area(), ellipse.area()));
        prop_assert!(approx(circle.perimeter(), ellipse.perimeter()));
        prop_assert!(approx(circle.major_semi_axis(), ellipse.major_semi_axis()));
        prop_assert!(approx(circle.minor_semi_axis(), ellipse.minor_semi_axis()));
    }

    #[test]
    fn square_circle_radii(a in any_point(), b in any_point()) {
        prop_assume!(distance(&a, &b) > 0.1);
        let s = Square::new(a, b).unwrap();
        let outer = s.circumscribed_circle().radius();
        let inner = s.inscribed_circle().radius();
        prop_assert!(approx(outer, inner * SQRT_2));
        prop_assert!(approx(s.area(), s.side() * s.side()));
    }

    #[test]
    fn ellipse_eccentricity_in_unit_interval(a in any_point(), b in any_point(), p in size()) {
        let e = Ellipse::new(a, b, p);
        let ecc = e.eccentricity();
        prop_assert!((0.0..1.0).contains(&ecc));
        prop_assert!(e.minor_semi_axis() <= e.major_semi_axis());
    }

    #[test]
    fn euler_line(t in any_triangle()) {
        let o = t.circumscribed_circle().unwrap().center();
        let h = t.orthocenter().unwrap();
        let n = t.nine_points_circle().unwrap().center();
        let scale = 1.0 + (h - o).norm_squared();
        prop_assert!(vector_product(&(h - o), &(n - o)).abs() <= 1e-9 * scale);
        prop_assert!((n - midpoint(&o, &h)).norm() < 1e-9 * scale.sqrt());
    }

    #[test]
    fn rectangle_corners_span_the_sides(a in any_point(), b in any_point(), w in size()) {
        prop_assume!(distance(&a, &b) > 0.1);
        let r = Rectangle::new(a, b, w).unwrap();
        let [p0, p1, p2, p3] = r.vertices().unwrap();
        prop_assert!(approx(distance(&p0, &p1), r.first_side()));
        prop_assert!(approx(distance(&p1, &p2), r.second_side()));
        prop_assert!(approx(distance(&p2, &p3), r.first_side()));
        prop_assert!(approx(distance(&p3, &p0), r.second_side()));
        prop_assert!(approx(distance(&p0, &p2), r.diagonal()));
    }
}
