use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shapes::{Circle, Ellipse, Figure, Point, Rectangle, Shape, Square, Triangle};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Debug, Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Build one planar shape, transform it, and print its metrics as JSON")]
#[command(allow_negative_numbers = true)]
struct Cmd {
    /// Move the shape so its center lands on X Y (applied first)
    #[arg(long, global = true, num_args = 2, value_names = ["X", "Y"])]
    translate: Option<Vec<f64>>,
    /// Rotate about the center by RAD radians, counter-clockwise (applied second)
    #[arg(long, global = true, value_name = "RAD")]
    rotate: Option<f64>,
    /// Scale about the center by K (applied last)
    #[arg(long, global = true, value_name = "K")]
    scale: Option<f64>,

    #[command(subcommand)]
    kind: Kind,
}

#[derive(Debug, Subcommand)]
enum Kind {
    /// Ellipse from two foci and the periapsis distance
    #[command(allow_negative_numbers = true)]
    Ellipse {
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        focus_a: Vec<f64>,
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        focus_b: Vec<f64>,
        #[arg(long)]
        per: f64,
    },
    /// Circle from center and radius
    #[command(allow_negative_numbers = true)]
    Circle {
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        center: Vec<f64>,
        #[arg(long)]
        radius: f64,
    },
    /// Rectangle from its centerline A-B and the perpendicular width
    #[command(allow_negative_numbers = true)]
    Rectangle {
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        a: Vec<f64>,
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        b: Vec<f64>,
        #[arg(long)]
        width: f64,
    },
    /// Square from its centerline A-B
    #[command(allow_negative_numbers = true)]
    Square {
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        a: Vec<f64>,
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        b: Vec<f64>,
    },
    /// Triangle from three vertices
    #[command(allow_negative_numbers = true)]
    Triangle {
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        a: Vec<f64>,
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        b: Vec<f64>,
        #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"])]
        c: Vec<f64>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let mut figure = build(&cmd.kind)?;
    tracing::info!(kind = figure.kind(), "built");
    apply_transforms(&mut figure, &cmd)?;
    let report = report::build(&figure)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn pt(name: &str, xy: &[f64]) -> Result<Point> {
    match xy {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => bail!("--{name} takes exactly two numbers, got {}", xy.len()),
    }
}

fn build(kind: &Kind) -> Result<Figure> {
    let figure: Figure = match kind {
        Kind::Ellipse {
            focus_a,
            focus_b,
            per,
        } => Ellipse::new(pt("focus-a", focus_a)?, pt("focus-b", focus_b)?, *per).into(),
        Kind::Circle { center, radius } => Circle::new(pt("center", center)?, *radius).into(),
        Kind::Rectangle { a, b, width } => Rectangle::new(pt("a", a)?, pt("b", b)?, *width)
            .context("building rectangle")?
            .into(),
        Kind::Square { a, b } => Square::new(pt("a", a)?, pt("b", b)?)
            .context("building square")?
            .into(),
        Kind::Triangle { a, b, c } => Triangle::new(pt("a", a)?, pt("b", b)?, pt("c", c)?)
            .context("building triangle")?
            .into(),
    };
    Ok(figure)
}

fn apply_transforms(figure: &mut Figure, cmd: &Cmd) -> Result<()> {
    if let Some(xy) = &cmd.translate {
        let to = pt("translate", xy)?;
        tracing::info!(x = to.x, y = to.y, "translate");
        figure.translate(to);
    }
    if let Some(angle) = cmd.rotate {
        tracing::info!(angle, "rotate");
        figure.rotate(angle);
    }
    if let Some(k) = cmd.scale {
        tracing::info!(k, "scale");
        figure.scale(k);
    }
    Ok(())
}
