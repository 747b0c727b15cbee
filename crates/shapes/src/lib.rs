//! Planar shapes: metric queries and similarity transforms.
//!
//! Shape kinds: `Ellipse`, `Circle`, `Rectangle`, `Square`, `Triangle`.
//! All implement `Shape` (center, perimeter, area, translate, rotate,
//! scale); `Figure` wraps any of them for closed-set dispatch.
//!
//! Conventions
//! - Points are `nalgebra::Point2<f64>`, vectors `nalgebra::Vector2<f64>`.
//! - Angles are radians, counter-clockwise positive.
//! - Constructors and derived-geometry queries that need a direction or a
//!   non-collinear configuration return `DegenerateGeometryError` instead of
//!   propagating NaN.

pub mod cfg;
pub mod ellipse;
pub mod error;
pub mod point;
pub mod rectangle;
pub mod shape;
pub mod triangle;

#[cfg(test)]
mod tests_props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use ellipse::{Circle, Ellipse};
pub use error::DegenerateGeometryError;
pub use point::{Point, Vec2};
pub use rectangle::{Rectangle, Square};
pub use shape::{Figure, Shape};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{
        angle_between, between, distance, midpoint, polar, scalar_product, vector_product,
        Point, PointExt, Vec2, VectorExt,
    };
    pub use crate::{
        Circle, DegenerateGeometryError, Ellipse, Figure, GeomCfg, Rectangle, Shape, Square,
        Triangle,
    };
}
