//! The shape contract and the closed set of shape kinds.

use crate::ellipse::{Circle, Ellipse};
use crate::point::Point;
use crate::rectangle::{Rectangle, Square};
use crate::triangle::Triangle;

/// Metric queries and similarity transforms shared by every shape.
///
/// Mutators work in place; `translated`/`rotated`/`scaled` are the
/// functional-update forms.
pub trait Shape {
    /// Representative center (each shape defines its own rule).
    fn center(&self) -> Point;
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;
    /// Rigid shift so that `center()` becomes `new_center`.
    fn translate(&mut self, new_center: Point);
    /// Counter-clockwise rotation by `angle` radians about `center()`.
    fn rotate(&mut self, angle: f64);
    /// Uniform scaling about `center()`; stored sizes scale by `|coefficient|`.
    fn scale(&mut self, coefficient: f64);

    fn translated(mut self, new_center: Point) -> Self
    where
        Self: Sized,
    {
        self.translate(new_center);
        self
    }

    fn rotated(mut self, angle: f64) -> Self
    where
        Self: Sized,
    {
        self.rotate(angle);
        self
    }

    fn scaled(mut self, coefficient: f64) -> Self
    where
        Self: Sized,
    {
        self.scale(coefficient);
        self
    }
}

/// Any of the supported shapes, dispatched by pattern matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Figure {
    Ellipse(Ellipse),
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
}

impl Figure {
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Ellipse(_) => "ellipse",
            Figure::Circle(_) => "circle",
            Figure::Rectangle(_) => "rectangle",
            Figure::Square(_) => "square",
            Figure::Triangle(_) => "triangle",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            Figure::Ellipse(s) => s,
            Figure::Circle(s) => s,
            Figure::Rectangle(s) => s,
            Figure::Square(s) => s,
            Figure::Triangle(s) => s,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Figure::Ellipse(s) => s,
            Figure::Circle(s) => s,
            Figure::Rectangle(s) => s,
            Figure::Square(s) => s,
            Figure::Triangle(s) => s,
        }
    }
}

impl Shape for Figure {
    fn center(&self) -> Point {
        self.as_shape().center()
    }
    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }
    fn area(&self) -> f64 {
        self.as_shape().area()
    }
    fn translate(&mut self, new_center: Point) {
        self.as_shape_mut().translate(new_center)
    }
    fn rotate(&mut self, angle: f64) {
        self.as_shape_mut().rotate(angle)
    }
    fn scale(&mut self, coefficient: f64) {
        self.as_shape_mut().scale(coefficient)
    }
}

macro_rules! impl_from_for_figure {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Figure {
                #[inline]
                fn from(s: $kind) -> Self {
                    Figure::$kind(s)
                }
            }
        )*
    };
}

impl_from_for_figure!(Ellipse, Circle, Rectangle, Square, Triangle);
