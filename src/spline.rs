use log::trace;

use crate::error::{SplineError, SplineResult};
use crate::knot::Knot;
use crate::polynomial::{Polynomial, SplineCoefficients};
use crate::tridiagonal::{Solver, TridiagonalSystem};

const UNIFORM_SPACING_TOLERANCE: f64 = 1e-12;

/// Natural cubic spline over strictly increasing knots.
///
/// Interior knots are C2, both end knots have a zero second derivative.
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    knots: Vec<Knot>,
    moments: Vec<f64>,
    polynomials: Vec<Polynomial>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl NaturalSpline {
    /// Builds the spline with the default [Solver].
    /// # Example
    /// ```
    /// use natural_spline::{Knot, NaturalSpline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let knots = vec![
    ///     Knot::new(0.0, 0.0).unwrap(),
    ///     Knot::new(1.0, 2.0).unwrap(),
    ///     Knot::new(3.0, 0.0).unwrap(),
    /// ];
    /// let spline = NaturalSpline::new(knots).unwrap();
    ///
    /// assert_approx_eq!(1.1875, spline.interpolate(0.5).unwrap(), 1e-12);
    /// assert_approx_eq!(1.75, spline.interpolate(2.0).unwrap(), 1e-12);
    /// ```
    /// # Errors
    /// - [SplineError::InvalidArgument] for fewer than 2 knots,
    /// - [SplineError::SingularSystem] when two knots share the same x.
    pub fn new(knots: Vec<Knot>) -> SplineResult<Self> {
        Self::with_solver(knots, Solver::default())
    }

    pub fn with_solver(knots: Vec<Knot>, solver: Solver) -> SplineResult<Self> {
        if knots.len() < 2 {
            return Err(SplineError::invalid(format!(
                "spline needs at least 2 knots, got {}",
                knots.len()
            )));
        }

        let number_of_intervals = knots.len() - 1;
        let mut spline = NaturalSpline {
            knots,
            moments: Vec::new(),
            polynomials: Vec::with_capacity(number_of_intervals),
            min_x: 0.0,
            max_x: 0.0,
            is_knot_spacing_uniform: false,
        };

        spline.sort_knots();
        spline.check_knots_spacing()?;
        spline.calculate_polynomials(solver)?;
        Ok(spline)
    }

    /// Builds the spline from parallel slices of abscissae and values.
    pub fn from_samples(xs: &[f64], ys: &[f64], solver: Solver) -> SplineResult<Self> {
        if xs.len() != ys.len() {
            return Err(SplineError::invalid(format!(
                "abscissae and values differ in length: {} != {}",
                xs.len(),
                ys.len()
            )));
        }
        let knots = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| Knot::new(*x, *y))
            .collect::<SplineResult<Vec<Knot>>>()?;
        Self::with_solver(knots, solver)
    }

    /// Value at `x`, which must lie within the knot range.
    pub fn interpolate(&self, x: f64) -> SplineResult<f64> {
        if self.is_in_range(x) {
            let index = self.find_interval_index(x);
            Ok(self.polynomials[index].evaluate(x))
        } else {
            Err(self.out_of_range(x))
        }
    }

    pub fn batch_interpolate(&self, x_vector: &[f64]) -> SplineResult<Vec<f64>> {
        if let Some(x) = x_vector.iter().find(|x| !self.is_in_range(**x)) {
            return Err(self.out_of_range(*x));
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Value at any `x`. Points before the second knot use the first interval, points after the
    /// second to last knot use the last interval.
    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.polynomials[index].evaluate(x)
            }
        }
    }

    pub fn batch_extrapolate(&self, x_vector: &[f64]) -> Vec<f64> {
        trace!(
            "extrapolating {} values over {} intervals",
            x_vector.len(),
            self.polynomials.len()
        );
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            match self.evaluate_on_boundaries(*x) {
                Some(result) => results.push(result),
                None => {
                    index = self.find_interval_index_with_hint(index, *x);
                    results.push(self.polynomials[index].evaluate(*x));
                }
            }
        }
        results
    }

    /// `order`-th derivative at `x`, with the same interval selection as
    /// [NaturalSpline::extrapolate].
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        self.polynomials[self.boundary_interval_index(x)].derivative(x, order)
    }

    /// Second derivatives at the knots, in knot order.
    pub fn moments(&self) -> &[f64] {
        &self.moments
    }

    pub fn coefficients(&self) -> Vec<SplineCoefficients> {
        self.polynomials.iter().map(|p| *p.coefficients()).collect()
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn is_uniform(&self) -> bool {
        self.is_knot_spacing_uniform
    }

    fn sort_knots(&mut self) {
        self.knots.sort();
        self.min_x = self.knots[0].get_x();
        self.max_x = self.knots[self.knots.len() - 1].get_x();
    }

    fn check_knots_spacing(&mut self) -> SplineResult<()> {
        let x_spacing_vec: Vec<f64> = self
            .knots
            .windows(2)
            .map(|w| w[1].get_x() - w[0].get_x())
            .collect();

        if let Some(interval) = x_spacing_vec.iter().position(|spacing| *spacing <= 0.0) {
            return Err(SplineError::SingularSystem { interval });
        }

        let tolerance = UNIFORM_SPACING_TOLERANCE * (self.max_x - self.min_x);
        self.is_knot_spacing_uniform = x_spacing_vec
            .iter()
            .all(|spacing| (spacing - x_spacing_vec[0]).abs() <= tolerance);

        Ok(())
    }

    fn calculate_polynomials(&mut self, solver: Solver) -> SplineResult<()> {
        let xs: Vec<f64> = self.knots.iter().map(Knot::get_x).collect();
        let ys: Vec<f64> = self.knots.iter().map(Knot::get_y).collect();

        let moments = TridiagonalSystem::natural_moments(&xs, &ys)?.solve(solver)?;

        for i in 0..self.knots.len() - 1 {
            let coefficients = SplineCoefficients::from_moments(
                xs[i],
                xs[i + 1],
                ys[i],
                ys[i + 1],
                moments[i],
                moments[i + 1],
            );
            self.polynomials.push(Polynomial::new(xs[i], coefficients));
        }
        self.moments = moments;
        Ok(())
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn out_of_range(&self, x: f64) -> SplineError {
        SplineError::OutOfRange { x, min: self.min_x, max: self.max_x }
    }

    fn find_interval_index(&self, x: f64) -> usize {
        if self.is_knot_spacing_uniform {
            self.find_interval_index_uniform(x)
        } else {
            self.find_interval_index_bisect(x)
        }
    }

    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let last_interval = self.knots.len() - 2;
        let relative_x = ((x - self.min_x) / (self.max_x - self.min_x)).clamp(0.0, 1.0);
        let mut index =
            ((relative_x * (last_interval + 1) as f64).floor() as usize).min(last_interval);

        // rounding in the division can land one interval off
        if index > 0 && x < self.knots[index].get_x() {
            index -= 1;
        } else if index < last_interval && x > self.knots[index + 1].get_x() {
            index += 1;
        }
        index
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.polynomials.len()
            && self.is_in_interval_range(index_hint + 1, x)
        {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.knots[interval_index].get_x() <= x && x <= self.knots[interval_index + 1].get_x()
    }

    fn boundary_interval_index(&self, x: f64) -> usize {
        let size = self.knots.len();
        if x < self.knots[1].get_x() {
            0
        } else if x > self.knots[size - 2].get_x() {
            size - 2
        } else {
            self.find_interval_index(x)
        }
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let size = self.knots.len();
        if x < self.knots[1].get_x() {
            Some(self.polynomials[0].evaluate(x))
        } else if x > self.knots[size - 2].get_x() {
            Some(self.polynomials[size - 2].evaluate(x))
        } else {
            None
        }
    }
}
