extern crate natural_spline;

use natural_spline::{interpolate_with, CurveOptions, Point, Solver};

fn main() {
    env_logger::init();

    let points: Vec<Point> = (0..40)
        .map(|i| {
            let angle = i as f64 * 0.35;
            Point::new(angle.cos() * (1.0 + 0.05 * i as f64), angle.sin() * (1.0 + 0.05 * i as f64))
        })
        .collect();

    let options = CurveOptions::default();
    let thomas = interpolate_with(&points, &options.with_solver(Solver::Thomas)).unwrap();
    let dense = interpolate_with(&points, &options.with_solver(Solver::DenseLu)).unwrap();

    let max_difference = thomas
        .points()
        .zip(dense.points())
        .map(|(a, b)| (a.x - b.x).abs().max((a.y - b.y).abs()))
        .fold(0.0, f64::max);

    println!("samples;max_difference");
    println!("{};{:e}", thomas.len(), max_difference);
}
