use super::{Candidate, Point, Skipped};

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// At least one candidate was feasible; the optimum is reported.
    Optimal,

    /// No candidate was feasible.
    Infeasible,

    /// Feasible candidates existed, but the observer discarded all of them.
    AllDiscarded,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A feasible corner point paired with its profit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibleEvaluation {
    /// Which candidate produced the point.
    pub candidate: Candidate,

    /// The feasible point.
    pub point: Point,

    /// Objective value at the point.
    pub profit: f64,
}

/// The result of a corner-point solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The feasible candidate with the greatest profit.
    ///
    /// `None` means there is no feasible solution, or the observer discarded
    /// every feasible candidate or stopped before one was accepted.
    pub optimal: Option<FeasibleEvaluation>,

    /// Every accepted feasible candidate, in enumeration order.
    pub feasible: Vec<FeasibleEvaluation>,

    /// Every candidate that could not be computed, in enumeration order.
    pub skipped: Vec<Skipped>,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        optimal: Option<FeasibleEvaluation>,
        feasible: Vec<FeasibleEvaluation>,
        skipped: Vec<Skipped>,
    ) -> Self {
        Self {
            status,
            optimal,
            feasible,
            skipped,
        }
    }

    /// Returns true if a feasible optimum was found.
    #[must_use]
    pub fn has_optimum(&self) -> bool {
        self.optimal.is_some()
    }
}
