use thiserror::Error;

/// Result type used across spline construction and evaluation.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors raised while building or evaluating a spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Input rejected before any computation: too few points or samples,
    /// non-finite coordinates, mismatched lengths.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The moment system could not be solved. `interval` is the index of the
    /// first zero-width interval, or of the row whose pivot vanished.
    #[error("singular moment system at interval {interval}")]
    SingularSystem { interval: usize },

    /// Query point outside `[min, max]` in
    /// [`NaturalSpline::interpolate`](crate::NaturalSpline::interpolate).
    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },
}

impl SplineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SplineError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "invalid argument: spline needs at least 2 knots, got 1",
            SplineError::invalid("spline needs at least 2 knots, got 1").to_string()
        );
        assert_eq!(
            "singular moment system at interval 3",
            SplineError::SingularSystem { interval: 3 }.to_string()
        );
        assert_eq!(
            "x = 3 is out of range [0, 2]",
            SplineError::OutOfRange { x: 3.0, min: 0.0, max: 2.0 }.to_string()
        );
    }
}
