use assert_approx_eq::assert_approx_eq;
use natural_spline::{
    interpolate, interpolate_with, ControlPointSet, CurveOptions, ParametricSpline, Point,
    SplineError, DEFAULT_SAMPLES, PREVIEW_SAMPLES,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)))
        .collect()
}

#[test]
fn curve_hits_every_control_point() {
    let mut rng = StdRng::seed_from_u64(2024);

    for count in [2, 3, 4, 7, 12, 30] {
        let points = random_points(&mut rng, count);
        let steps_per_segment = rng.gen_range(1..20);
        let num_points = (count - 1) * steps_per_segment + 1;

        let curve = interpolate(&points, num_points).unwrap();

        assert_eq!(num_points, curve.len());
        for (i, point) in points.iter().enumerate() {
            let k = i * steps_per_segment;
            assert_approx_eq!(curve.x[k], point.x, 1e-9 * point.x.abs().max(1.0));
            assert_approx_eq!(curve.y[k], point.y, 1e-9 * point.y.abs().max(1.0));
        }
    }
}

#[test]
fn control_coordinates_are_returned_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = random_points(&mut rng, 9);

    let (_, _, x_control, y_control) = interpolate(&points, DEFAULT_SAMPLES).unwrap().into_parts();

    assert_eq!(points.iter().map(|p| p.x).collect::<Vec<_>>(), x_control);
    assert_eq!(points.iter().map(|p| p.y).collect::<Vec<_>>(), y_control);
}

#[test]
fn parameter_values_span_unit_interval() {
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];

    for num_points in [2, 3, 10, PREVIEW_SAMPLES, DEFAULT_SAMPLES] {
        let curve = interpolate(&points, num_points).unwrap();

        assert_eq!(0.0, curve.t[0]);
        assert_eq!(1.0, curve.t[num_points - 1]);
        assert!(curve.t.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn preview_lies_on_the_full_curve() {
    let mut rng = StdRng::seed_from_u64(5);
    let points = random_points(&mut rng, 10);
    let set = ControlPointSet::new(points.clone()).unwrap();
    let spline = ParametricSpline::new(&set).unwrap();

    let preview = interpolate_with(&points, &CurveOptions::preview()).unwrap();

    assert_eq!(PREVIEW_SAMPLES, preview.len());
    for (t, point) in preview.t.iter().zip(preview.points()) {
        let expected = spline.evaluate(*t);
        assert_approx_eq!(point.x, expected.x, 1e-9);
        assert_approx_eq!(point.y, expected.y, 1e-9);
    }
}

#[test]
fn zigzag_bends_between_control_points() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 2.0),
    ];
    let curve = interpolate(&points, 5).unwrap();

    assert_approx_eq!(curve.x[0], 0.0, 1e-12);
    assert_approx_eq!(curve.y[0], 0.0, 1e-12);
    assert_approx_eq!(curve.x[4], 3.0, 1e-12);
    assert_approx_eq!(curve.y[4], 2.0, 1e-12);
    for y in &curve.y[1..4] {
        assert!(*y > 0.0 && *y < 2.0, "y = {y}");
    }
    // a straight line from the first to the last point would give 0.5 and 1.5
    assert!((curve.y[1] - 0.5).abs() > 0.1);
    assert!((curve.y[3] - 1.5).abs() > 0.1);
}

#[test]
fn invalid_arguments() {
    let one = vec![Point::new(1.0, 1.0)];
    let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];

    assert!(matches!(interpolate(&[], DEFAULT_SAMPLES), Err(SplineError::InvalidArgument(_))));
    assert!(matches!(interpolate(&one, DEFAULT_SAMPLES), Err(SplineError::InvalidArgument(_))));
    assert!(matches!(interpolate(&two, 1), Err(SplineError::InvalidArgument(_))));
    assert!(matches!(interpolate(&two, 0), Err(SplineError::InvalidArgument(_))));
}

#[test]
fn independent_calls_across_threads() {
    let mut rng = StdRng::seed_from_u64(99);
    let points = random_points(&mut rng, 16);
    let expected = interpolate(&points, 200).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| interpolate(&points, 200).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(expected, handle.join().unwrap());
        }
    });
}
