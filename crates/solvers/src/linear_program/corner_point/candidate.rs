use extrema_core::Tolerance;

use super::{Constraint, ConstraintId, Point, Problem};

/// A decision-variable axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `xa` axis, where `xb = 0`.
    Xa,

    /// The `xb` axis, where `xa = 0`.
    Xb,
}

/// Where a candidate corner point comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// The origin, `(0, 0)`.
    Origin,

    /// Where a constraint line crosses an axis.
    AxisIntercept {
        constraint: ConstraintId,
        axis: Axis,
    },

    /// Where the two constraint lines cross.
    Intersection,
}

/// Why a candidate could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The constraint's coefficient for the axis is zero, so its line never
    /// crosses that axis.
    ZeroCoefficient,

    /// The constraint lines are parallel or coincident.
    ParallelLines,

    /// Constraint 1 has a zero `xb` coefficient, so `xb` cannot be
    /// back-substituted from it.
    ZeroBackSubstitutionDivisor,
}

/// A candidate that was skipped, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skipped {
    pub candidate: Candidate,
    pub reason: SkipReason,
}

/// Generates every candidate in enumeration order.
pub(super) fn candidates(
    problem: &Problem,
    tol: Tolerance,
) -> [(Candidate, Result<Point, SkipReason>); 6] {
    let intercept = |constraint, axis| {
        (
            Candidate::AxisIntercept { constraint, axis },
            axis_intercept(problem.constraint(constraint), axis, tol),
        )
    };

    let [first, second] = &problem.constraints;

    [
        (Candidate::Origin, Ok(Point::ORIGIN)),
        intercept(ConstraintId::First, Axis::Xa),
        intercept(ConstraintId::Second, Axis::Xa),
        intercept(ConstraintId::First, Axis::Xb),
        intercept(ConstraintId::Second, Axis::Xb),
        (Candidate::Intersection, intersection(first, second, tol)),
    ]
}

/// Returns where the constraint, taken as an equality, crosses `axis`.
fn axis_intercept(
    constraint: &Constraint,
    axis: Axis,
    tol: Tolerance,
) -> Result<Point, SkipReason> {
    match axis {
        Axis::Xa if tol.is_nonzero(constraint.coeff_a) => {
            Ok(Point::new(constraint.limit / constraint.coeff_a, 0.0))
        }
        Axis::Xb if tol.is_nonzero(constraint.coeff_b) => {
            Ok(Point::new(0.0, constraint.limit / constraint.coeff_b))
        }
        _ => Err(SkipReason::ZeroCoefficient),
    }
}

/// Returns where the two constraints, taken as equalities, cross.
///
/// `xa` comes from the determinant formula and `xb` from back-substituting
/// `xa` into the first constraint.
fn intersection(
    first: &Constraint,
    second: &Constraint,
    tol: Tolerance,
) -> Result<Point, SkipReason> {
    let determinant = first.coeff_a * second.coeff_b - second.coeff_a * first.coeff_b;
    if tol.is_zero(determinant) {
        return Err(SkipReason::ParallelLines);
    }

    let xa = (first.limit * second.coeff_b - second.limit * first.coeff_b) / determinant;

    if tol.is_zero(first.coeff_b) {
        return Err(SkipReason::ZeroBackSubstitutionDivisor);
    }
    let xb = (first.limit - first.coeff_a * xa) / first.coeff_b;

    Ok(Point::new(xa, xb))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::linear_program::corner_point::ObjectiveCoefficients;

    fn problem(first: Constraint, second: Constraint) -> Problem {
        Problem::new(ObjectiveCoefficients::new(1.0, 1.0), first, second)
    }

    #[test]
    fn candidates_follow_fixed_order() {
        let problem = problem(Constraint::new(1.0, 1.0, 5.0), Constraint::new(3.0, 2.0, 12.0));
        let order: Vec<_> = candidates(&problem, Tolerance::default())
            .iter()
            .map(|(candidate, _)| *candidate)
            .collect();

        assert_eq!(
            order,
            vec![
                Candidate::Origin,
                Candidate::AxisIntercept {
                    constraint: ConstraintId::First,
                    axis: Axis::Xa
                },
                Candidate::AxisIntercept {
                    constraint: ConstraintId::Second,
                    axis: Axis::Xa
                },
                Candidate::AxisIntercept {
                    constraint: ConstraintId::First,
                    axis: Axis::Xb
                },
                Candidate::AxisIntercept {
                    constraint: ConstraintId::Second,
                    axis: Axis::Xb
                },
                Candidate::Intersection,
            ]
        );
    }

    #[test]
    fn intercepts_divide_limit_by_coefficient() {
        let constraint = Constraint::new(3.0, 2.0, 12.0);
        let tol = Tolerance::default();

        let on_xa = axis_intercept(&constraint, Axis::Xa, tol).expect("nonzero coeff_a");
        assert_relative_eq!(on_xa.xa, 4.0);
        assert_relative_eq!(on_xa.xb, 0.0);

        let on_xb = axis_intercept(&constraint, Axis::Xb, tol).expect("nonzero coeff_b");
        assert_relative_eq!(on_xb.xa, 0.0);
        assert_relative_eq!(on_xb.xb, 6.0);
    }

    #[test]
    fn zero_coefficient_skips_intercept() {
        let constraint = Constraint::new(0.0, 2.0, 12.0);
        assert_eq!(
            axis_intercept(&constraint, Axis::Xa, Tolerance::default()),
            Err(SkipReason::ZeroCoefficient)
        );

        let nearly_zero = Constraint::new(1.0, 1e-12, 12.0);
        assert_eq!(
            axis_intercept(&nearly_zero, Axis::Xb, Tolerance::default()),
            Err(SkipReason::ZeroCoefficient)
        );
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let point = intersection(
            &Constraint::new(1.0, 1.0, 5.0),
            &Constraint::new(3.0, 2.0, 12.0),
            Tolerance::default(),
        )
        .expect("lines cross");

        assert_relative_eq!(point.xa, 2.0);
        assert_relative_eq!(point.xb, 3.0);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let result = intersection(
            &Constraint::new(1.0, 2.0, 10.0),
            &Constraint::new(2.0, 4.0, 8.0),
            Tolerance::default(),
        );
        assert_eq!(result, Err(SkipReason::ParallelLines));
    }

    #[test]
    fn vertical_first_constraint_skips_back_substitution() {
        // xa <= 4 and xa + xb <= 6 cross at (4, 2), but xb cannot be
        // recovered from the first constraint.
        let result = intersection(
            &Constraint::new(1.0, 0.0, 4.0),
            &Constraint::new(1.0, 1.0, 6.0),
            Tolerance::default(),
        );
        assert_eq!(result, Err(SkipReason::ZeroBackSubstitutionDivisor));
    }
}
