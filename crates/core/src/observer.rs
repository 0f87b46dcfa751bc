/// Watches a solver run one event at a time and may steer it.
///
/// A solver calls [`observe`](Observer::observe) for every event it emits.
/// Returning `Some(action)` asks the solver to act on it (Newton's only action
/// is to stop early); returning `None` lets the run continue as it would have.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that watches nothing.
pub trait Observer<E, A> {
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
