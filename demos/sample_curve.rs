extern crate natural_spline;

use natural_spline::{interpolate, Point};

fn main() {

    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(0.5, 3.0)
    ];

    let number_of_points = 60;
    let curve = interpolate(&points, number_of_points).unwrap();

    println!("t;x;y");
    for i in 0..number_of_points {
        println!("{:.3};{:.3};{:.3}", curve.t[i], curve.x[i], curve.y[i]);
    }
}
