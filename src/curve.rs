//! Parametric natural spline through a sequence of 2D control points.
//!
//! The control points are not required to be monotonic in x. Each point gets a parameter value
//! `t_i = i / (N - 1)` from its position in the sequence and `x(t)`, `y(t)` are interpolated by two
//! independent natural splines sharing that parameter grid. Closed, self-intersecting and
//! vertical shapes are therefore all valid input.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{SplineError, SplineResult};
use crate::options::CurveOptions;
use crate::spline::NaturalSpline;
use crate::tridiagonal::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Ordered sequence of at least 2 finite control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct ControlPointSet {
    points: Vec<Point>,
}

impl ControlPointSet {
    pub fn new(points: Vec<Point>) -> SplineResult<Self> {
        if points.len() < 2 {
            return Err(SplineError::invalid(format!(
                "curve needs at least 2 control points, got {}",
                points.len()
            )));
        }
        if let Some(index) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            let point = points[index];
            return Err(SplineError::invalid(format!(
                "control point {index} is not finite: ({}, {})",
                point.x, point.y
            )));
        }
        Ok(ControlPointSet { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a set holds at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn interpolate(&self, options: &CurveOptions) -> SplineResult<SampledCurve> {
        options.validate()?;
        ParametricSpline::with_solver(self, options.solver)?.sample(options.num_points)
    }
}

impl TryFrom<Vec<Point>> for ControlPointSet {
    type Error = SplineError;

    fn try_from(points: Vec<Point>) -> SplineResult<Self> {
        ControlPointSet::new(points)
    }
}

impl From<ControlPointSet> for Vec<Point> {
    fn from(set: ControlPointSet) -> Self {
        set.points
    }
}

/// Uniformly spaced, strictly increasing values over `[0, 1]`. The first value is exactly 0 and
/// the last exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    values: Vec<f64>,
}

impl ParameterGrid {
    pub fn uniform(len: usize) -> SplineResult<Self> {
        if len < 2 {
            return Err(SplineError::invalid(format!(
                "parameter grid needs at least 2 values, got {len}"
            )));
        }
        let last = (len - 1) as f64;
        let values = (0..len).map(|i| i as f64 / last).collect();
        Ok(ParameterGrid { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a grid holds at least 2 values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Densely sampled curve together with the control points it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledCurve {
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_control: Vec<f64>,
    pub y_control: Vec<f64>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(x, y)| Point::new(*x, *y))
    }

    /// `(x_curve, y_curve, x_control, y_control)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.x_control, self.y_control)
    }
}

/// Pair of natural splines `x(t)`, `y(t)` over the control point parameter grid.
#[derive(Debug, Clone)]
pub struct ParametricSpline {
    x: NaturalSpline,
    y: NaturalSpline,
    breakpoints: ParameterGrid,
}

impl ParametricSpline {
    pub fn new(points: &ControlPointSet) -> SplineResult<Self> {
        Self::with_solver(points, Solver::default())
    }

    pub fn with_solver(points: &ControlPointSet, solver: Solver) -> SplineResult<Self> {
        let breakpoints = ParameterGrid::uniform(points.len())?;
        let x = NaturalSpline::from_samples(breakpoints.values(), &points.xs(), solver)?;
        let y = NaturalSpline::from_samples(breakpoints.values(), &points.ys(), solver)?;
        Ok(ParametricSpline { x, y, breakpoints })
    }

    pub fn breakpoints(&self) -> &ParameterGrid {
        &self.breakpoints
    }

    pub fn x_spline(&self) -> &NaturalSpline {
        &self.x
    }

    pub fn y_spline(&self) -> &NaturalSpline {
        &self.y
    }

    /// Point at parameter `t`. Values outside `[0, 1]` continue the end intervals.
    pub fn evaluate(&self, t: f64) -> Point {
        Point::new(self.x.extrapolate(t), self.y.extrapolate(t))
    }

    /// `order`-th derivative of both coordinates with respect to `t`.
    pub fn derivative(&self, t: f64, order: usize) -> Point {
        Point::new(self.x.derivative(t, order), self.y.derivative(t, order))
    }

    /// Evaluates the curve on `num_points` uniformly spaced parameter values over `[0, 1]`.
    pub fn sample(&self, num_points: usize) -> SplineResult<SampledCurve> {
        let t = ParameterGrid::uniform(num_points)?.into_vec();
        trace!(
            "sampling {} control points at {} parameter values",
            self.breakpoints.len(),
            num_points
        );

        let x = self.x.batch_extrapolate(&t);
        let y = self.y.batch_extrapolate(&t);
        let x_control = self.x.knots().iter().map(|k| k.get_y()).collect();
        let y_control = self.y.knots().iter().map(|k| k.get_y()).collect();

        Ok(SampledCurve { t, x, y, x_control, y_control })
    }
}

/// Samples the natural spline through `points` at `num_points` parameter values.
///
/// # Example
/// ```
/// use natural_spline::{interpolate, Point};
/// use assert_approx_eq::assert_approx_eq;
///
/// let points: Vec<Point> = [(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// let (x, y, x_control, y_control) = interpolate(&points, 5).unwrap().into_parts();
///
/// assert_eq!(5, x.len());
/// assert_approx_eq!(1.5, x[2], 1e-12);
/// assert_approx_eq!(1.0, y[2], 1e-12);
/// assert_eq!(vec![0.0, 1.0, 2.0, 3.0], x_control);
/// assert_eq!(vec![0.0, 2.0, 0.0, 2.0], y_control);
/// ```
/// # Errors
/// [SplineError::InvalidArgument] when fewer than 2 points or samples are requested.
pub fn interpolate(points: &[Point], num_points: usize) -> SplineResult<SampledCurve> {
    interpolate_with(points, &CurveOptions::default().with_num_points(num_points))
}

pub fn interpolate_with(points: &[Point], options: &CurveOptions) -> SplineResult<SampledCurve> {
    ControlPointSet::new(points.to_vec())?.interpolate(options)
}
