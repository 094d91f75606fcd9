//! Corner-point method for two-variable, two-constraint linear programs.
//!
//! # Algorithm
//!
//! The optimum of a bounded linear program lies on a vertex of its feasible
//! region. With two variables and two `≤` constraints those vertices are
//! drawn from a small fixed set of candidates, generated in this order:
//!
//! 1. the origin `(0, 0)`
//! 2. the `xa`-axis intercept of constraint 1, then of constraint 2
//! 3. the `xb`-axis intercept of constraint 1, then of constraint 2
//! 4. the intersection of the two constraint lines
//!
//! An intercept is skipped when its coefficient is zero. The intersection is
//! skipped when the lines are parallel (zero determinant) or when the
//! back-substitution into constraint 1 would divide by zero. Each remaining
//! candidate is checked for feasibility and the feasible candidate with the
//! greatest profit is reported. Ties go to the candidate generated first.
//!
//! Zero checks and constraint checks use the tolerance in [`Config`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per candidate:
//!
//! - [`Event::Skipped`] — the candidate could not be computed
//! - [`Event::Infeasible`] — the candidate violates a constraint
//! - [`Event::Feasible`] — the candidate is feasible, paired with the best
//!   evaluation so far
//!
//! Observers can return [`Action::Discard`] on a feasible candidate to leave
//! it out of the result, or [`Action::StopEarly`] to return immediately with
//! what has been accepted so far. If every feasible candidate is discarded
//! the solve finishes with [`Status::AllDiscarded`] rather than
//! [`Status::Infeasible`].

mod action;
mod candidate;
mod config;
mod error;
mod event;
mod point;
mod problem;
mod solution;


pub use action::Action;
pub use candidate::{Axis, Candidate, SkipReason, Skipped};
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use problem::{Constraint, ConstraintId, ObjectiveCoefficients, Problem};
pub use solution::{FeasibleEvaluation, Solution, Status};

use extrema_core::Observer;

use candidate::candidates;

/// Finds the profit-maximizing corner point of the problem.
///
/// The observer receives an [`Event`] for every candidate.
/// See the [module docs](self) for the candidate order and observer actions.
///
/// # Errors
///
/// Returns [`Error::NonFiniteInput`] if any coefficient or limit is NaN or
/// infinite. An empty feasible region is not an error; it is reported as
/// [`Status::Infeasible`].
pub fn solve<Obs>(
    problem: &Problem,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    problem.validate()?;

    let tol = config.tolerance();
    let mut best: Option<FeasibleEvaluation> = None;
    let mut discarded = 0usize;
    let mut feasible = Vec::new();
    let mut skipped = Vec::new();

    for (candidate, outcome) in candidates(problem, tol) {
        let point = match outcome {
            Ok(point) => point,
            Err(reason) => {
                let skip = Skipped { candidate, reason };
                match reason {
                    SkipReason::ZeroBackSubstitutionDivisor => tracing::warn!(
                        ?candidate,
                        "constraint 1 has no xb term to back-substitute into; skipping intersection"
                    ),
                    SkipReason::ZeroCoefficient | SkipReason::ParallelLines => {
                        tracing::debug!(?candidate, ?reason, "candidate skipped");
                    }
                }
                skipped.push(skip);

                if let Some(Action::StopEarly) = observer.observe(&Event::Skipped(skip)) {
                    return Ok(Solution::new(Status::StoppedByObserver, best, feasible, skipped));
                }
                continue;
            }
        };

        if !problem.is_feasible(point, tol) {
            tracing::debug!(?candidate, xa = point.xa, xb = point.xb, "infeasible");

            if let Some(Action::StopEarly) =
                observer.observe(&Event::Infeasible { candidate, point })
            {
                return Ok(Solution::new(Status::StoppedByObserver, best, feasible, skipped));
            }
            continue;
        }

        let evaluation = FeasibleEvaluation {
            candidate,
            point,
            profit: problem.objective.profit(point),
        };
        tracing::debug!(
            ?candidate,
            xa = point.xa,
            xb = point.xb,
            profit = evaluation.profit,
            "feasible"
        );

        match observer.observe(&Event::Feasible { evaluation, best }) {
            Some(Action::StopEarly) => {
                return Ok(Solution::new(Status::StoppedByObserver, best, feasible, skipped));
            }
            Some(Action::Discard) => {
                tracing::debug!(?candidate, "discarded by observer");
                discarded += 1;
                continue;
            }
            None => {}
        }

        if best.is_none_or(|b| evaluation.profit > b.profit) {
            best = Some(evaluation);
        }
        feasible.push(evaluation);
    }

    let status = match (best, discarded) {
        (Some(_), _) => Status::Optimal,
        (None, 0) => Status::Infeasible,
        (None, _) => Status::AllDiscarded,
    };
    Ok(Solution::new(status, best, feasible, skipped))
}

/// Finds the profit-maximizing corner point without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteInput`] if any coefficient or limit is NaN or infinite.
pub fn solve_unobserved(problem: &Problem, config: &Config) -> Result<Solution, Error> {
    solve(problem, config, ())
}
