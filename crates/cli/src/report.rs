use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use shapes::{Circle, Figure, Point, Shape};

/// Metrics common to every shape plus the kind-specific extras.
#[derive(Debug, Serialize)]
pub struct Report {
    pub kind: &'static str,
    pub center: [f64; 2],
    pub perimeter: f64,
    pub area: f64,
    pub details: Value,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn circle_json(c: &Circle) -> Value {
    json!({ "center": xy(c.center()), "radius": c.radius() })
}

pub fn build(figure: &Figure) -> Result<Report> {
    let details = match figure {
        Figure::Ellipse(e) => json!({
            "foci": e.foci().map(xy),
            "focal_distance": e.focal_distance(),
            "major_semi_axis": e.major_semi_axis(),
            "minor_semi_axis": e.minor_semi_axis(),
            "eccentricity": e.eccentricity(),
        }),
        Figure::Circle(c) => json!({ "radius": c.radius() }),
        Figure::Rectangle(r) => json!({
            "vertices": r.vertices().context("rectangle vertices")?.map(xy),
            "first_side": r.first_side(),
            "second_side": r.second_side(),
            "diagonal": r.diagonal(),
        }),
        Figure::Square(s) => json!({
            "vertices": s.vertices().context("square vertices")?.map(xy),
            "side": s.side(),
            "diagonal": s.diagonal(),
            "circumscribed_circle": circle_json(&s.circumscribed_circle()),
            "inscribed_circle": circle_json(&s.inscribed_circle()),
        }),
        Figure::Triangle(t) => json!({
            "vertices": t.vertices().map(xy),
            "circumscribed_circle": circle_json(&t.circumscribed_circle().context("circumcircle")?),
            "inscribed_circle": circle_json(&t.inscribed_circle().context("incircle")?),
            "orthocenter": xy(t.orthocenter().context("orthocenter")?),
            "nine_points_circle": circle_json(&t.nine_points_circle().context("nine-point circle")?),
        }),
    };
    Ok(Report {
        kind: figure.kind(),
        center: xy(figure.center()),
        perimeter: figure.perimeter(),
        area: figure.area(),
        details,
    })
}
