use crate::error::{SplineError, SplineResult};

/// Knot represents a breakpoint through which a natural spline passes.
/// - `x` - abscissa of the breakpoint,
/// - `y` - value the spline takes at `x`.
///
/// Continuity at every interior knot is C2 and both end knots carry a zero second derivative,
/// so no per-knot continuity data is stored.
#[derive(Debug, Clone, Copy)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    /// Checked constructor of [Knot].
    /// # Example
    /// ```
    /// use natural_spline::Knot;
    ///
    /// let knot = Knot::new(1.0, 2.0);
    /// assert!(knot.is_ok());
    /// ```
    /// # Errors
    /// Error is returned when either coordinate is NaN or infinite.
    /// ```
    /// use natural_spline::Knot;
    ///
    /// assert!(Knot::new(f64::NAN, 2.0).is_err());
    /// assert!(Knot::new(1.0, f64::INFINITY).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> SplineResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SplineError::invalid(format!(
                "knot coordinates must be finite, got ({x}, {y})"
            )));
        }
        Ok(Knot { x, y })
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

impl TryFrom<(f64, f64)> for Knot {
    type Error = SplineError;

    fn try_from((x, y): (f64, f64)) -> SplineResult<Self> {
        Knot::new(x, y)
    }
}

impl Ord for Knot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Knot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Knot {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for Knot {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let knot = Knot::new(1.0, 2.5).unwrap();

        assert_eq!(1.0, knot.get_x());
        assert_eq!(2.5, knot.get_y());
    }

    #[test]
    fn test_try_from_tuple() {
        let knot = Knot::try_from((-0.5, 4.0)).unwrap();

        assert_eq!(-0.5, knot.x);
        assert_eq!(4.0, knot.y);
        assert!(Knot::try_from((f64::NEG_INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            Knot::new(f64::NAN, 0.0),
            Err(SplineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ordering_uses_x_only() {
        let mut knots = vec![
            Knot::new(2.0, 0.0).unwrap(),
            Knot::new(-1.0, 5.0).unwrap(),
            Knot::new(0.5, 1.0).unwrap(),
        ];
        knots.sort();

        let xs: Vec<f64> = knots.iter().map(Knot::get_x).collect();
        assert_eq!(vec![-1.0, 0.5, 2.0], xs);
        assert_eq!(Knot::new(1.0, 3.0).unwrap(), Knot::new(1.0, -3.0).unwrap());
    }
}
