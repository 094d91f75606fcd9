use extrema_core::Tolerance;

use super::{Error, Point};

/// Unit profits of the two products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveCoefficients {
    pub profit_a: f64,
    pub profit_b: f64,
}

impl ObjectiveCoefficients {
    /// Creates a new objective.
    #[must_use]
    pub fn new(profit_a: f64, profit_b: f64) -> Self {
        Self { profit_a, profit_b }
    }

    /// Returns `profit_a * xa + profit_b * xb`.
    #[must_use]
    pub fn profit(&self, point: Point) -> f64 {
        self.profit_a * point.xa + self.profit_b * point.xb
    }
}

/// The constraint `coeff_a * xa + coeff_b * xb <= limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub coeff_a: f64,
    pub coeff_b: f64,
    pub limit: f64,
}

impl Constraint {
    /// Creates a new constraint.
    #[must_use]
    pub fn new(coeff_a: f64, coeff_b: f64, limit: f64) -> Self {
        Self {
            coeff_a,
            coeff_b,
            limit,
        }
    }

    /// Returns the left-hand side `coeff_a * xa + coeff_b * xb` at `point`.
    #[must_use]
    pub fn lhs(&self, point: Point) -> f64 {
        self.coeff_a * point.xa + self.coeff_b * point.xb
    }

    /// Returns true if `point` satisfies the constraint within `tol`.
    #[must_use]
    pub fn admits(&self, point: Point, tol: Tolerance) -> bool {
        tol.admits(self.lhs(point), self.limit)
    }
}

/// Identifies one of the two constraints of a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintId {
    First,
    Second,
}

impl ConstraintId {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// A linear program: maximize the objective subject to two constraints and
/// non-negative variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub objective: ObjectiveCoefficients,
    pub constraints: [Constraint; 2],
}

impl Problem {
    /// Creates a problem from an objective and its two constraints.
    #[must_use]
    pub fn new(objective: ObjectiveCoefficients, first: Constraint, second: Constraint) -> Self {
        Self {
            objective,
            constraints: [first, second],
        }
    }

    /// Returns the constraint with the given identifier.
    #[must_use]
    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.index()]
    }

    /// Returns true if `point` is non-negative and satisfies both constraints within `tol`.
    #[must_use]
    pub fn is_feasible(&self, point: Point, tol: Tolerance) -> bool {
        point.is_non_negative() && self.constraints.iter().all(|c| c.admits(point, tol))
    }

    /// Checks that every coefficient and limit is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteInput`] naming the first non-finite value.
    pub fn validate(&self) -> Result<(), Error> {
        let [first, second] = &self.constraints;
        let fields = [
            ("profit_a", self.objective.profit_a),
            ("profit_b", self.objective.profit_b),
            ("constraint 1 coeff_a", first.coeff_a),
            ("constraint 1 coeff_b", first.coeff_b),
            ("constraint 1 limit", first.limit),
            ("constraint 2 coeff_a", second.coeff_a),
            ("constraint 2 coeff_b", second.coeff_b),
            ("constraint 2 limit", second.limit),
        ];

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(Error::NonFiniteInput { name, value }),
            None => Ok(()),
        }
    }
}
