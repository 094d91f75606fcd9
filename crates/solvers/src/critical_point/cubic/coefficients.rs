use crate::quadratic::QuadraticCoefficients;

use super::Error;

/// Coefficients of `f(x) = a x³ + b x² + c x + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicCoefficients {
    /// Creates a new set of cubic coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluates `f(x)`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x.powi(3) + self.b * x.powi(2) + self.c * x + self.d
    }

    /// Returns the first derivative, `3a x² + 2b x + c`.
    #[must_use]
    pub fn derivative(&self) -> QuadraticCoefficients {
        QuadraticCoefficients::new(3.0 * self.a, 2.0 * self.b, self.c)
    }

    /// Evaluates the second derivative, `6a x + 2b`.
    #[must_use]
    pub fn second_derivative_at(&self, x: f64) -> f64 {
        6.0 * self.a * x + 2.0 * self.b
    }

    /// Checks that every coefficient is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteInput`] naming the first non-finite coefficient.
    pub fn validate(&self) -> Result<(), Error> {
        [("a", self.a), ("b", self.b), ("c", self.c), ("d", self.d)]
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |(name, value)| {
                Err(Error::NonFiniteInput { name, value })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derivatives_of_a_cubic() {
        // f(x) = x³ - 3x² + 1
        let cubic = CubicCoefficients::new(1.0, -3.0, 0.0, 1.0);

        assert_eq!(cubic.derivative(), QuadraticCoefficients::new(3.0, -6.0, 0.0));
        assert_relative_eq!(cubic.second_derivative_at(0.0), -6.0);
        assert_relative_eq!(cubic.second_derivative_at(2.0), 6.0);
        assert_relative_eq!(cubic.evaluate(2.0), -3.0);
    }

    #[test]
    fn validate_names_the_bad_coefficient() {
        let cubic = CubicCoefficients::new(1.0, 2.0, f64::NEG_INFINITY, 0.0);
        assert!(matches!(
            cubic.validate(),
            Err(Error::NonFiniteInput { name: "c", .. })
        ));
        assert!(CubicCoefficients::new(2.0, 0.0, 4.0, 5.0).validate().is_ok());
    }
}
