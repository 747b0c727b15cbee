//! Print the classical centers of a 3-4-5 triangle and the square inscribed
//! in its circumcircle.

use nalgebra::point;
use shapes::prelude::*;

fn main() -> Result<(), DegenerateGeometryError> {
    let t = Triangle::new(point![0.0, 0.0], point![4.0, 0.0], point![0.0, 3.0])?;
    println!("area={} perimeter={}", t.area(), t.perimeter());

    let outer = t.circumscribed_circle()?;
    let inner = t.inscribed_circle()?;
    let nine = t.nine_points_circle()?;
    println!("circumcenter={} R={}", outer.center(), outer.radius());
    println!("incenter={} r={}", inner.center(), inner.radius());
    println!("orthocenter={}", t.orthocenter()?);
    println!("nine-point center={} radius={}", nine.center(), nine.radius());

    // Diagonal of the square equals the circumcircle diameter.
    let c = outer.center();
    let half = outer.radius() / std::f64::consts::SQRT_2;
    let s = Square::new(c - Vec2::new(half, 0.0), c + Vec2::new(half, 0.0))?;
    println!(
        "square side={} circumradius={}",
        s.side(),
        s.circumscribed_circle().radius()
    );
    Ok(())
}
