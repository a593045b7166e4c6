use serde::{Deserialize, Serialize};

use crate::error::{SplineError, SplineResult};
use crate::tridiagonal::Solver;

/// Number of samples of a full curve.
pub const DEFAULT_SAMPLES: usize = 500;

/// Number of samples of an in-place preview.
pub const PREVIEW_SAMPLES: usize = 300;

/// Sampling configuration of a parametric curve.
///
/// Missing fields fall back to their defaults when deserialized:
/// ```
/// use natural_spline::{CurveOptions, Solver};
///
/// let options: CurveOptions = serde_json::from_str(r#"{ "solver": "dense_lu" }"#).unwrap();
/// assert_eq!(500, options.num_points);
/// assert_eq!(Solver::DenseLu, options.solver);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    pub num_points: usize,
    pub solver: Solver,
}

impl Default for CurveOptions {
    fn default() -> Self {
        CurveOptions { num_points: DEFAULT_SAMPLES, solver: Solver::default() }
    }
}

impl CurveOptions {
    pub fn preview() -> Self {
        CurveOptions { num_points: PREVIEW_SAMPLES, ..Self::default() }
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn validate(&self) -> SplineResult<()> {
        if self.num_points < 2 {
            return Err(SplineError::invalid(format!(
                "curve needs at least 2 samples, got {}",
                self.num_points
            )));
        }
        Ok(())
    }
}
