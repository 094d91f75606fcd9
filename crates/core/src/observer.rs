/// Receives solver events and decides how the solver should proceed.
///
/// A solver hands each event to its observer and acts on the returned value:
/// `Some(action)` requests a solver-specific action, `None` leaves the solver
/// on its default path. Observers are how callers trace, filter, or cut short
/// a solve without the solver knowing anything about them.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
