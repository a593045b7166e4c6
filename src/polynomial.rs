/// Coefficients of one cubic piece `S(u) = a*u^3 + b*u^2 + c*u + d`, where `u` is the offset
/// from the left breakpoint of the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl SplineCoefficients {
    /// Coefficients of the interval `[x0, x1]` with values `y0`, `y1` and moments `m0`, `m1`.
    pub fn from_moments(x0: f64, x1: f64, y0: f64, y1: f64, m0: f64, m1: f64) -> Self {
        let dx = x1 - x0;
        SplineCoefficients {
            a: (m1 - m0) / (6.0 * dx),
            b: m0 / 2.0,
            c: (y1 - y0) / dx - (m1 + 2.0 * m0) * dx / 6.0,
            d: y0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Polynomial {
    origin: f64,
    coefficients: SplineCoefficients,
}

impl Polynomial {
    pub fn new(origin: f64, coefficients: SplineCoefficients) -> Self {
        Polynomial { origin, coefficients }
    }

    pub fn coefficients(&self) -> &SplineCoefficients {
        &self.coefficients
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let SplineCoefficients { a, b, c, d } = self.coefficients;
        let u = x - self.origin;
        ((a * u + b) * u + c) * u + d
    }

    /// Value of the `order`-th derivative at `x`. Orders above 3 vanish.
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let SplineCoefficients { a, b, c, d: _ } = self.coefficients;
        let u = x - self.origin;
        match order {
            0 => self.evaluate(x),
            1 => (3.0 * a * u + 2.0 * b) * u + c,
            2 => 6.0 * a * u + 2.0 * b,
            3 => 6.0 * a,
            _ => 0.0,
        }
    }
}
