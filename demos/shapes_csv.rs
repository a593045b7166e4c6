extern crate natural_spline;

use std::env;
use std::process::ExitCode;

use natural_spline::{load_shapes, CurveOptions};

const DEFAULT_SHAPES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shapes.json");

fn main() -> ExitCode {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SHAPES.to_string());
    let options = CurveOptions::preview();

    let curves = match load_shapes(&path).and_then(|shapes| shapes.interpolate_all(&options)) {
        Ok(curves) => curves,
        Err(error) => {
            eprintln!("{path}: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("shape;x;y");
    for (name, curve) in &curves {
        for point in curve.points() {
            println!("{};{:.4};{:.4}", name, point.x, point.y);
        }
    }
    ExitCode::SUCCESS
}
