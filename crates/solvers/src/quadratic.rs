//! Real roots of `a x² + b x + c = 0`.

use extrema_core::Tolerance;

/// Coefficients of the quadratic `a x² + b x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCoefficients {
    /// Creates a new set of quadratic coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the discriminant `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates the quadratic at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

/// The real roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// No real root.
    NoReal,

    /// A single root, either repeated or from a linear equation.
    One(f64),

    /// Two distinct roots.
    Two(f64, f64),
}

impl Roots {
    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NoReal => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns true if there is no real root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoReal)
    }

    /// Iterates over the roots in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let (first, second) = match *self {
            Self::NoReal => (None, None),
            Self::One(x) => (Some(x), None),
            Self::Two(x1, x2) => (Some(x1), Some(x2)),
        };
        first.into_iter().chain(second)
    }
}

/// Finds the real roots of `a x² + b x + c = 0`.
///
/// Roots come from the quadratic formula in the order `(-b + √Δ) / 2a`, then
/// `(-b - √Δ) / 2a`. Two roots that differ by less than `tol` collapse to a
/// single repeated root, and a discriminant within `tol` of zero is treated
/// as zero. If `a` is zero within `tol` the equation is solved as linear.
#[must_use]
pub fn real_roots(quadratic: QuadraticCoefficients, tol: Tolerance) -> Roots {
    let QuadraticCoefficients { a, b, c } = quadratic;

    if tol.is_zero(a) {
        return if tol.is_zero(b) {
            Roots::NoReal
        } else {
            Roots::One(-c / b)
        };
    }

    let discriminant = quadratic.discriminant();
    if discriminant < 0.0 && tol.is_nonzero(discriminant) {
        return Roots::NoReal;
    }

    let sqrt_disc = discriminant.max(0.0).sqrt();
    let root1 = (-b + sqrt_disc) / (2.0 * a);
    let root2 = (-b - sqrt_disc) / (2.0 * a);

    if tol.is_within(root1 - root2) {
        Roots::One(root1)
    } else {
        Roots::Two(root1, root2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn two_distinct_roots_in_formula_order() {
        // 3x² - 6x = 0
        let roots = real_roots(QuadraticCoefficients::new(3.0, -6.0, 0.0), Tolerance::default());

        let Roots::Two(x1, x2) = roots else {
            panic!("expected two roots, got {roots:?}");
        };
        assert_relative_eq!(x1, 2.0);
        assert_relative_eq!(x2, 0.0);
    }

    #[test]
    fn negative_discriminant_has_no_real_roots() {
        // 6x² + 4 = 0
        let roots = real_roots(QuadraticCoefficients::new(6.0, 0.0, 4.0), Tolerance::default());
        assert_eq!(roots, Roots::NoReal);
        assert!(roots.is_empty());
        assert_eq!(roots.iter().count(), 0);
    }

    #[test]
    fn tangent_quadratic_has_one_root() {
        // (x - 1)² = x² - 2x + 1
        let roots = real_roots(QuadraticCoefficients::new(1.0, -2.0, 1.0), Tolerance::default());

        let Roots::One(x) = roots else {
            panic!("expected a repeated root, got {roots:?}");
        };
        assert_relative_eq!(x, 1.0);
    }

    #[test]
    fn roots_exactly_a_tolerance_apart_stay_distinct() {
        // 2x² - 2x = 0 has roots 1 and 0
        let tol = Tolerance::new(1.0).expect("valid tolerance");
        let roots = real_roots(QuadraticCoefficients::new(2.0, -2.0, 0.0), tol);
        assert_eq!(roots, Roots::Two(1.0, 0.0));

        let wider = Tolerance::new(1.5).expect("valid tolerance");
        let roots = real_roots(QuadraticCoefficients::new(2.0, -2.0, 0.0), wider);
        assert_eq!(roots, Roots::One(1.0));
    }

    #[test]
    fn slightly_negative_discriminant_counts_as_tangent() {
        let quadratic = QuadraticCoefficients::new(1.0, 0.0, 1e-12);
        assert!(quadratic.discriminant() < 0.0);

        let roots = real_roots(quadratic, Tolerance::default());
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn zero_leading_coefficient_solves_linear() {
        let roots = real_roots(QuadraticCoefficients::new(0.0, 2.0, -4.0), Tolerance::default());
        assert_eq!(roots, Roots::One(2.0));

        let roots = real_roots(QuadraticCoefficients::new(0.0, 0.0, 3.0), Tolerance::default());
        assert_eq!(roots, Roots::NoReal);
    }

    #[test]
    fn roots_are_zeros_of_the_quadratic() {
        let quadratic = QuadraticCoefficients::new(2.0, -3.0, -5.0);
        let roots = real_roots(quadratic, Tolerance::default());

        assert_eq!(roots.len(), 2);
        for x in roots.iter() {
            assert_relative_eq!(quadratic.evaluate(x), 0.0, epsilon = 1e-12);
        }
    }
}
