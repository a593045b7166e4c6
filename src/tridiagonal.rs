//! Moment system of a natural cubic spline and the solvers for it.
//!
//! Row `i` of the system reads `lower[i-1]*m[i-1] + diag[i]*m[i] + upper[i]*m[i+1] = rhs[i]`.
//! The first and last rows are identity rows with zero right-hand side, which pins both end
//! moments to zero.

use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{SplineError, SplineResult};

/// A pivot counts as vanished when it is this small relative to the entries it was built from.
const PIVOT_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// Linear solver used for the moment system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    /// Thomas algorithm, O(n).
    #[default]
    Thomas,
    /// LU decomposition of the full matrix, O(n^3). Kept for cross-checking.
    DenseLu,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
    rhs: Vec<f64>,
}

impl TridiagonalSystem {
    /// Builds a system from its bands. `lower` and `upper` must be one shorter than `diag`.
    pub fn new(
        lower: Vec<f64>,
        diag: Vec<f64>,
        upper: Vec<f64>,
        rhs: Vec<f64>,
    ) -> SplineResult<Self> {
        let n = diag.len();
        if n == 0 {
            return Err(SplineError::invalid("tridiagonal system must not be empty"));
        }
        if lower.len() != n - 1 || upper.len() != n - 1 || rhs.len() != n {
            return Err(SplineError::invalid(format!(
                "band lengths do not match: lower {}, diag {}, upper {}, rhs {}",
                lower.len(),
                n,
                upper.len(),
                rhs.len()
            )));
        }
        Ok(TridiagonalSystem { lower, diag, upper, rhs })
    }

    /// Moment system of the natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// - [SplineError::InvalidArgument] when fewer than 2 points are given or lengths differ,
    /// - [SplineError::SingularSystem] when `xs` is not strictly increasing.
    pub fn natural_moments(xs: &[f64], ys: &[f64]) -> SplineResult<Self> {
        let n = xs.len();
        if n != ys.len() {
            return Err(SplineError::invalid(format!(
                "abscissae and values differ in length: {} != {}",
                n,
                ys.len()
            )));
        }
        if n < 2 {
            return Err(SplineError::invalid(format!(
                "moment system needs at least 2 points, got {n}"
            )));
        }

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        if let Some(interval) = h.iter().position(|width| !(*width > 0.0)) {
            return Err(SplineError::SingularSystem { interval });
        }

        let mut lower = vec![0.0; n - 1];
        let mut diag = vec![1.0; n];
        let mut upper = vec![0.0; n - 1];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            lower[i - 1] = h[i - 1];
            diag[i] = 2.0 * (h[i - 1] + h[i]);
            upper[i] = h[i];
            rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        Ok(TridiagonalSystem { lower, diag, upper, rhs })
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    pub fn solve(&self, solver: Solver) -> SplineResult<Vec<f64>> {
        debug!("solving {0}x{0} moment system with {1:?}", self.len(), solver);
        match solver {
            Solver::Thomas => self.solve_thomas(),
            Solver::DenseLu => self.solve_dense(),
        }
    }

    pub fn solve_thomas(&self) -> SplineResult<Vec<f64>> {
        let n = self.len();
        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        let first_scale = self.diag[0].abs() + self.upper.first().map_or(0.0, |u| u.abs());
        if self.diag[0].abs() <= PIVOT_TOLERANCE * first_scale {
            return Err(SplineError::SingularSystem { interval: 0 });
        }
        if n > 1 {
            c_prime[0] = self.upper[0] / self.diag[0];
        }
        d_prime[0] = self.rhs[0] / self.diag[0];

        for i in 1..n {
            let eliminated = self.lower[i - 1] * c_prime[i - 1];
            let denom = self.diag[i] - eliminated;
            if denom.abs() <= PIVOT_TOLERANCE * (self.diag[i].abs() + eliminated.abs()) {
                return Err(SplineError::SingularSystem { interval: i });
            }
            if i < n - 1 {
                c_prime[i] = self.upper[i] / denom;
            }
            d_prime[i] = (self.rhs[i] - self.lower[i - 1] * d_prime[i - 1]) / denom;
        }

        let mut solution = vec![0.0; n];
        solution[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            solution[i] = d_prime[i] - c_prime[i] * solution[i + 1];
        }
        Ok(solution)
    }

    pub fn solve_dense(&self) -> SplineResult<Vec<f64>> {
        let n = self.len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = self.diag[i];
            if i > 0 {
                matrix[(i, i - 1)] = self.lower[i - 1];
            }
            if i < n - 1 {
                matrix[(i, i + 1)] = self.upper[i];
            }
        }
        let rhs = DVector::<f64>::from_column_slice(&self.rhs);
        let scale = matrix.amax();

        let lu = matrix.lu();
        match lu.solve(&rhs) {
            Some(solution) => Ok(solution.iter().copied().collect()),
            None => {
                let interval = lu
                    .u()
                    .diagonal()
                    .iter()
                    .position(|pivot| pivot.abs() <= PIVOT_TOLERANCE * scale)
                    .unwrap_or(0);
                Err(SplineError::SingularSystem { interval })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn residual(system: &TridiagonalSystem, solution: &[f64]) -> f64 {
        let n = system.len();
        (0..n)
            .map(|i| {
                let mut row = system.diag[i] * solution[i];
                if i > 0 {
                    row += system.lower[i - 1] * solution[i - 1];
                }
                if i < n - 1 {
                    row += system.upper[i] * solution[i + 1];
                }
                (row - system.rhs[i]).abs()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn natural_moments_rows() {
        let eps = 1e-12;
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 2.0, 0.0];
        let system = TridiagonalSystem::natural_moments(&xs, &ys).unwrap();

        assert_eq!(vec![1.0, 6.0, 1.0], system.diag);
        assert_eq!(vec![1.0, 0.0], system.lower);
        assert_eq!(vec![0.0, 2.0], system.upper);
        assert_approx_eq!(system.rhs[0], 0.0, eps);
        // 6 * ((0 - 2) / 2 - (2 - 0) / 1)
        assert_approx_eq!(system.rhs[1], -18.0, eps);
        assert_approx_eq!(system.rhs[2], 0.0, eps);
    }

    #[test]
    fn two_points_give_zero_moments() {
        let system = TridiagonalSystem::natural_moments(&[0.0, 1.0], &[3.0, -1.0]).unwrap();

        for solver in [Solver::Thomas, Solver::DenseLu] {
            assert_eq!(vec![0.0, 0.0], system.solve(solver).unwrap());
        }
    }

    #[test]
    fn thomas_matches_known_solution() {
        let eps = 1e-12;
        let system =
            TridiagonalSystem::natural_moments(&[0.0, 1.0, 3.0], &[0.0, 2.0, 0.0]).unwrap();
        let moments = system.solve_thomas().unwrap();

        assert_approx_eq!(moments[0], 0.0, eps);
        assert_approx_eq!(moments[1], -3.0, eps);
        assert_approx_eq!(moments[2], 0.0, eps);
    }

    #[test]
    fn thomas_and_dense_agree() {
        let xs: Vec<f64> = (0..12).map(|i| i as f64 * 0.37 + (i % 3) as f64 * 0.05).collect();
        let ys: Vec<f64> = xs.iter().map(|x| (2.0 * x).sin() + 0.3 * x).collect();
        let system = TridiagonalSystem::natural_moments(&xs, &ys).unwrap();

        let thomas = system.solve(Solver::Thomas).unwrap();
        let dense = system.solve(Solver::DenseLu).unwrap();

        assert!(residual(&system, &thomas) < 1e-9);
        assert!(residual(&system, &dense) < 1e-9);
        for (t, d) in thomas.iter().zip(dense.iter()) {
            assert_approx_eq!(*t, *d, 1e-9);
        }
    }

    #[test]
    fn tiny_spacing_is_not_singular() {
        let h = 1e-15;
        let system =
            TridiagonalSystem::natural_moments(&[0.0, h, 2.0 * h, 3.0 * h], &[0.0, 1.0, 0.0, 1.0])
                .unwrap();

        let thomas = system.solve(Solver::Thomas).unwrap();
        let dense = system.solve(Solver::DenseLu).unwrap();

        // interior moments are -+4 / h^2
        let scale = 4.0 / (h * h);
        let expected = [0.0, -1.0, 1.0, 0.0];
        for moments in [&thomas, &dense] {
            for (m, e) in moments.iter().zip(expected) {
                assert_approx_eq!(*m / scale, e, 1e-9);
            }
        }
    }

    #[test]
    fn zero_width_interval_is_singular() {
        let result =
            TridiagonalSystem::natural_moments(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]);

        assert_eq!(Err(SplineError::SingularSystem { interval: 1 }), result);
    }

    #[test]
    fn decreasing_abscissae_are_singular() {
        let result = TridiagonalSystem::natural_moments(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);

        assert_eq!(Err(SplineError::SingularSystem { interval: 1 }), result);
    }

    #[test]
    fn too_few_points() {
        assert!(matches!(
            TridiagonalSystem::natural_moments(&[0.0], &[1.0]),
            Err(SplineError::InvalidArgument(_))
        ));
        assert!(matches!(
            TridiagonalSystem::natural_moments(&[0.0, 1.0], &[1.0]),
            Err(SplineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn vanishing_pivot_is_reported() {
        // second row eliminates to 1 - 1*1 = 0
        let system = TridiagonalSystem::new(
            vec![1.0, 0.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap();

        assert_eq!(Err(SplineError::SingularSystem { interval: 1 }), system.solve_thomas());
        assert!(matches!(system.solve_dense(), Err(SplineError::SingularSystem { .. })));
    }

    #[test]
    fn mismatched_bands_are_rejected() {
        let result = TridiagonalSystem::new(vec![1.0], vec![1.0, 1.0], vec![], vec![0.0, 0.0]);

        assert!(matches!(result, Err(SplineError::InvalidArgument(_))));
    }
}
