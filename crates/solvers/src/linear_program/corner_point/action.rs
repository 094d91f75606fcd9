/// Actions an observer can take during corner-point enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop enumerating and return the best evaluation accepted so far.
    ///
    /// The candidate in the current event is not accepted.
    StopEarly,

    /// Leave a feasible candidate out of the result.
    ///
    /// The candidate is neither listed as feasible nor considered for the
    /// optimum. Has no effect on skipped or infeasible candidates.
    Discard,
}
