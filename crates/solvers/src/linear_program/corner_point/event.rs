use super::{Candidate, FeasibleEvaluation, Point, Skipped};

/// Events emitted by the corner-point solver, one per candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The candidate could not be computed.
    Skipped(Skipped),

    /// The candidate violates a constraint or a non-negativity bound.
    Infeasible {
        /// Which candidate was checked.
        candidate: Candidate,

        /// The candidate's coordinates.
        point: Point,
    },

    /// The candidate is feasible.
    Feasible {
        /// The candidate with its profit.
        evaluation: FeasibleEvaluation,

        /// The best evaluation accepted before this one, if any.
        best: Option<FeasibleEvaluation>,
    },
}

impl Event {
    /// Returns the candidate this event is about.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        match self {
            Self::Skipped(skipped) => skipped.candidate,
            Self::Infeasible { candidate, .. } => *candidate,
            Self::Feasible { evaluation, .. } => evaluation.candidate,
        }
    }

    /// Returns the candidate's coordinates, if they could be computed.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Skipped(_) => None,
            Self::Infeasible { point, .. } => Some(*point),
            Self::Feasible { evaluation, .. } => Some(evaluation.point),
        }
    }
}
