extern crate natural_spline;

use natural_spline::{Knot, NaturalSpline, PREVIEW_SAMPLES};

fn main() {

    let knots = vec![
        Knot::new(1.0, 1.0).unwrap(),
        Knot::new(2.0, 0.0).unwrap(),
        Knot::new(3.0, -2.0).unwrap(),
        Knot::new(4.5, 1.0).unwrap(),
        Knot::new(5.0, 1.0).unwrap()
    ];

    let spline = NaturalSpline::new(knots).unwrap();

    // reaches one unit past both end knots
    let x_min = spline.min_x() - 1.0;
    let x_max = spline.max_x() + 1.0;
    let step = (x_max - x_min) / (PREVIEW_SAMPLES - 1) as f64;

    let x_vector: Vec<f64> = (0..PREVIEW_SAMPLES)
        .map(|i| x_min + step * i as f64)
        .collect();

    let result = spline.batch_extrapolate(&x_vector);

    println!("x;y");
    for i in 0..PREVIEW_SAMPLES {
        println!("{:.3};{:.3}", x_vector[i], result[i]);
    }
}
