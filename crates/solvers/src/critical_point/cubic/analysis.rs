use extrema_core::Tolerance;

use super::CubicCoefficients;

/// Second-derivative classification of a critical point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    LocalMinimum,
    LocalMaximum,

    /// The second derivative vanishes, so the test is inconclusive; for a
    /// cubic this is an inflection point.
    Inflection,
}

/// A point where the first derivative vanishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Location of the critical point.
    pub x: f64,

    /// Function value `f(x)`.
    pub fx: f64,

    /// Second derivative `f''(x)`.
    pub second_derivative: f64,

    /// Classification from the sign of the second derivative.
    pub kind: Kind,
}

impl CriticalPoint {
    /// Evaluates and classifies the cubic at a root `x` of its derivative.
    pub(super) fn classify(cubic: &CubicCoefficients, x: f64, tol: Tolerance) -> Self {
        let second_derivative = cubic.second_derivative_at(x);
        let kind = if tol.is_within(second_derivative) {
            Kind::Inflection
        } else if second_derivative > 0.0 {
            Kind::LocalMinimum
        } else {
            Kind::LocalMaximum
        };

        Self {
            x,
            fx: cubic.evaluate(x),
            second_derivative,
            kind,
        }
    }
}

/// Direction of a strictly monotonic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// The outcome of a cubic critical-point analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The leading coefficient is zero, so the function is not a cubic.
    Degenerate,

    /// The derivative has no real root; the function is strictly monotonic
    /// and has no critical points.
    Monotonic { direction: Direction },

    /// The derivative has one or two real roots.
    Classified {
        /// Critical points in root order.
        points: Vec<CriticalPoint>,

        /// The local minimum with the smallest `f(x)`, if any.
        best_minimum: Option<CriticalPoint>,
    },
}

impl Analysis {
    /// Returns the critical points, empty unless the analysis is [`Analysis::Classified`].
    #[must_use]
    pub fn critical_points(&self) -> &[CriticalPoint] {
        match self {
            Self::Classified { points, .. } => points,
            Self::Degenerate | Self::Monotonic { .. } => &[],
        }
    }

    /// Returns the local minimum with the smallest `f(x)`, if any.
    #[must_use]
    pub fn best_minimum(&self) -> Option<&CriticalPoint> {
        match self {
            Self::Classified { best_minimum, .. } => best_minimum.as_ref(),
            Self::Degenerate | Self::Monotonic { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_at_origin(b: f64) -> Kind {
        // f''(0) = 2b
        let cubic = CubicCoefficients::new(1.0, b, 0.0, 0.0);
        CriticalPoint::classify(&cubic, 0.0, Tolerance::default()).kind
    }

    #[test]
    fn second_derivative_at_the_tolerance_is_signed() {
        assert_eq!(kind_at_origin(5e-10), Kind::LocalMinimum);
        assert_eq!(kind_at_origin(-5e-10), Kind::LocalMaximum);
    }

    #[test]
    fn second_derivative_inside_the_tolerance_is_an_inflection() {
        assert_eq!(kind_at_origin(4e-10), Kind::Inflection);
        assert_eq!(kind_at_origin(-4e-10), Kind::Inflection);
        assert_eq!(kind_at_origin(0.0), Kind::Inflection);
    }
}
