//! Traits that let one observer serve several solvers.
//!
//! An observer written against these traits instead of a concrete event type
//! works with any solver whose events and actions implement them. Newton's
//! [`Event`](newton::Event) provides [`HasResidual`] and [`HasStep`], and its
//! [`Action`](newton::Action) provides [`CanStopEarly`].
//!
//! For example, an observer that gives up once the steps stop shrinking:
//!
//! ```rust
//! use tangent_core::Observer;
//! use tangent_observers::traits::{CanStopEarly, HasStep};
//!
//! struct Stalled {
//!     last: f64,
//!     patience: usize,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for Stalled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let step = event.step();
//!         if step >= self.last {
//!             self.patience = self.patience.saturating_sub(1);
//!         }
//!         self.last = step;
//!         (self.patience == 0).then(A::stop_early)
//!     }
//! }
//! ```

use tangent_solvers::equation::newton;

/// Events that know the function value at the current iterate.
pub trait HasResidual {
    /// `f(x_n)`, or NaN for events without an evaluated iterate.
    fn residual(&self) -> f64;
}

/// Events that know how far the iterate just moved.
pub trait HasStep {
    /// `|x_(n+1) - x_n|`, or NaN for events without a step.
    fn step(&self) -> f64;
}

/// Actions that include "stop now".
pub trait CanStopEarly {
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event<'_> {
    fn residual(&self) -> f64 {
        self.record().map_or(f64::NAN, newton::IterationRecord::value)
    }
}

impl HasStep for newton::Event<'_> {
    fn step(&self) -> f64 {
        self.record().map_or(f64::NAN, newton::IterationRecord::error)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tangent_core::Observer;
    use tangent_expr::Expr;

    /// Stops once the residual is small, regardless of the step size.
    struct ResidualBelow(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualBelow {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_newton_early() {
        let f = Expr::parse("x^2 - 2").unwrap();
        let df = f.derivative();
        let config = newton::Config::new(1e-15, 50).unwrap();

        let solution = newton::solve(&f, &df, 1.0, &config, ResidualBelow(1e-3)).unwrap();

        assert_eq!(solution.status, newton::Status::StoppedByObserver);
        assert!(solution.last().unwrap().value().abs() < 1e-3);
    }

    #[test]
    fn step_events_expose_residual_and_step() {
        let mut seen = Vec::new();
        let observer = |event: &newton::Event<'_>| -> Option<newton::Action> {
            seen.push((event.residual(), event.step()));
            None
        };

        let f = |x: f64| x - 3.0;
        let df = |_: f64| 1.0;
        newton::solve(&f, &df, 1.0, &newton::Config::default(), observer).unwrap();

        assert_eq!(seen, vec![(-2.0, 2.0), (0.0, 0.0)]);
    }

    #[test]
    fn failure_events_report_nan() {
        let mut seen = Vec::new();
        let observer = |event: &newton::Event<'_>| -> Option<newton::Action> {
            seen.push((event.residual(), event.step()));
            None
        };

        let f = Expr::parse("1 / x").unwrap();
        let df = f.derivative();
        let solution = newton::solve(&f, &df, 0.0, &newton::Config::default(), observer).unwrap();

        assert_eq!(solution.status, newton::Status::EvaluationFailed);
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.is_nan());
        assert!(seen[0].1.is_nan());
    }

    #[test]
    fn stop_early_maps_to_newton_action() {
        assert_eq!(newton::Action::stop_early(), newton::Action::StopEarly);
    }
}
