//! Natural cubic spline interpolation of 2D control point sequences.
//!
//! Control points are parameterized by their position in the sequence, so x does not have to be
//! monotonic. Both coordinates are interpolated by natural cubic splines (zero curvature at the
//! ends, C2 at interior points) whose moments come from a tridiagonal system.
//!
//! # Example
//! ```
//! use natural_spline::{interpolate, Point, DEFAULT_SAMPLES};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(3.0, 2.0),
//! ];
//! let curve = interpolate(&points, DEFAULT_SAMPLES).unwrap();
//!
//! assert_eq!(DEFAULT_SAMPLES, curve.len());
//! assert_approx_eq!(0.0, curve.y[0], 1e-12);
//! assert_approx_eq!(3.0, curve.x[DEFAULT_SAMPLES - 1], 1e-12);
//! assert_approx_eq!(2.0, curve.y[DEFAULT_SAMPLES - 1], 1e-12);
//! ```

mod curve;
mod error;
mod knot;
mod options;
mod polynomial;
mod shapes;
mod spline;
mod tridiagonal;

pub use curve::{
    interpolate, interpolate_with, ControlPointSet, ParameterGrid, ParametricSpline, Point,
    SampledCurve,
};
pub use error::{SplineError, SplineResult};
pub use knot::Knot;
pub use options::{CurveOptions, DEFAULT_SAMPLES, PREVIEW_SAMPLES};
pub use polynomial::SplineCoefficients;
pub use shapes::{load_shapes, ShapeError, ShapeSet};
pub use spline::NaturalSpline;
pub use tridiagonal::{Solver, TridiagonalSystem};
