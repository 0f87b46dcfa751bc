use std::cell::Cell;

use approx::assert_relative_eq;
use thiserror::Error;

use tangent_core::Fallible;

use super::{
    Action, Config, ConfigError, DerivativeGuard, Error, Event, Status, Target, find_root, solve,
    solve_batch, solve_unobserved,
};

#[derive(Debug, Error)]
#[error("outside domain at x = {0}")]
struct OutsideDomain(f64);

fn square_minus_four(x: f64) -> f64 {
    x * x - 4.0
}

fn two_x(x: f64) -> f64 {
    2.0 * x
}

#[test]
fn converges_to_positive_root() {
    let solution = find_root(&square_minus_four, &two_x, 3.0, 1e-6, 50).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.converged());
    assert!((solution.x - 2.0).abs() < 1e-6);
    assert_eq!(solution.iters, solution.trace.len());
    assert!(solution.failure.is_none());
}

#[test]
fn converged_estimate_is_last_next_x() {
    let solution = find_root(&square_minus_four, &two_x, 3.0, 1e-6, 50).unwrap();

    let last = solution.last().unwrap();
    assert!(last.error() < 1e-6);
    assert_eq!(solution.x, last.next_x());
    assert!(solution.trace[..solution.iters - 1].iter().all(|r| r.error() >= 1e-6));
}

#[test]
fn trace_is_contiguous_and_chained() {
    let solution = find_root(&square_minus_four, &two_x, 10.0, 1e-12, 50).unwrap();

    for (i, record) in solution.trace.iter().enumerate() {
        assert_eq!(record.iter(), i + 1);
        assert_eq!(record.error(), (record.next_x() - record.x()).abs());
    }
    for pair in solution.trace.windows(2) {
        assert_eq!(pair[1].x(), pair[0].next_x());
    }
    assert_eq!(solution.trace[0].x(), 10.0);
}

#[test]
fn convergence_requires_error_strictly_below_tolerance() {
    let f = |x: f64| x - 1.0;
    let df = |_: f64| 1.0;

    // The first step from 3.0 has error exactly 2.0.
    let on_boundary = find_root(&f, &df, 3.0, 2.0, 10).unwrap();
    assert_eq!(on_boundary.status, Status::Converged);
    assert_eq!(on_boundary.iters, 2);

    let above_boundary = find_root(&f, &df, 3.0, 2.000_001, 10).unwrap();
    assert_eq!(above_boundary.status, Status::Converged);
    assert_eq!(above_boundary.iters, 1);
    assert_relative_eq!(above_boundary.x, 1.0);
}

#[test]
fn no_real_root_exhausts_iterations_with_guarded_step() {
    let f = |x: f64| x * x + 1.0;

    let solution = find_root(&f, &two_x, 1.0, 1e-8, 20).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 20);
    assert_eq!(solution.trace.len(), 20);

    // x₁ = 0 exactly, where f' vanishes.
    assert_eq!(solution.trace[0].next_x(), 0.0);
    let guarded = &solution.trace[1];
    assert!(guarded.is_guarded());
    assert_eq!(guarded.derivative(), 0.0);
    assert_relative_eq!(guarded.slope(), 1e-10);
    assert_relative_eq!(guarded.next_x(), -1e10);

    assert_eq!(solution.guarded_steps().count(), 1);
    assert!(solution.trace.iter().all(|r| r.next_x().is_finite()));
    assert!(solution.x.is_finite());
}

#[test]
fn identical_inputs_give_identical_traces() {
    let f = |x: f64| x * x + 1.0;

    let first = find_root(&f, &two_x, 1.0, 1e-8, 20).unwrap();
    let second = find_root(&f, &two_x, 1.0, 1e-8, 20).unwrap();

    assert_eq!(first.trace, second.trace);
    assert_eq!(first.status, second.status);
    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert!(first.trace.iter().any(|r| r.is_guarded()));
}

#[test]
fn zero_derivative_at_root_converges_in_one_guarded_step() {
    let f = |x: f64| x.powi(3);
    let df = |x: f64| 3.0 * x * x;

    let solution = find_root(&f, &df, 0.0, 1e-6, 10).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert!(solution.trace[0].is_guarded());
    assert_eq!(solution.trace[0].error(), 0.0);
    assert_eq!(solution.x, 0.0);
}

#[test]
fn negative_near_zero_derivative_is_pushed_down() {
    // f'(x) = -1e-12 everywhere; the guard steps with slope -1e-12 - 1e-10.
    let f = |_: f64| 1.0;
    let df = |_: f64| -1e-12;

    let solution = find_root(&f, &df, 0.0, 1e-6, 1).unwrap();

    let record = solution.trace[0];
    assert!(record.is_guarded());
    assert_relative_eq!(record.slope(), -1e-12 - 1e-10);
    assert!(record.next_x() > 0.0);
}

#[test]
fn custom_guard_threshold_is_applied() {
    let guard = DerivativeGuard::new(1e-3, 1e-2).unwrap();
    let config = Config::new(1e-9, 5).unwrap().with_guard(guard);

    let f = |_: f64| 1.0;
    let df = |_: f64| 1e-4;

    let solution = solve_unobserved(&f, &df, 0.0, &config).unwrap();

    assert!(solution.trace[0].is_guarded());
    assert_relative_eq!(solution.trace[0].slope(), 1e-4 + 1e-2);
}

#[test]
fn rejects_invalid_tolerance_without_evaluating() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };
    let df = |_: f64| {
        calls.set(calls.get() + 1);
        1.0
    };

    for tol in [0.0, -1e-6, f64::NAN] {
        let result = find_root(&f, &df, 1.0, tol, 10);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidConfig(ConfigError::Tolerance)
        );
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_zero_max_iters_without_evaluating() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let result = find_root(&f, &two_x, 1.0, 1e-6, 0);

    assert_eq!(
        result.unwrap_err(),
        Error::InvalidConfig(ConfigError::MaxIters)
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_non_finite_initial_guess() {
    let config = Config::default();

    let result = solve_unobserved(&square_minus_four, &two_x, f64::INFINITY, &config);
    assert_eq!(
        result.unwrap_err(),
        Error::NonFiniteGuess { x0: f64::INFINITY }
    );

    let result = solve_unobserved(&square_minus_four, &two_x, f64::NAN, &config);
    assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
}

#[test]
fn function_failure_keeps_partial_trace() {
    let f = Fallible(|x: f64| {
        if x < 2.5 {
            Err(OutsideDomain(x))
        } else {
            Ok(square_minus_four(x))
        }
    });

    let solution = find_root(&f, &two_x, 3.0, 1e-6, 50).unwrap();

    assert_eq!(solution.status, Status::EvaluationFailed);
    assert_eq!(solution.iters, 1);

    let first_step = 3.0 - 5.0 / 6.0;
    assert_relative_eq!(solution.x, first_step);

    let failure = solution.failure.as_ref().unwrap();
    assert_eq!(failure.iter, 2);
    assert_eq!(failure.target, Target::Function);
    assert_relative_eq!(failure.x, first_step);
    assert!(failure.source.to_string().contains("outside domain"));
}

#[test]
fn derivative_failure_is_reported_as_derivative() {
    let df = Fallible(|x: f64| {
        if x < 2.5 {
            Err(OutsideDomain(x))
        } else {
            Ok(two_x(x))
        }
    });

    let solution = find_root(&square_minus_four, &df, 3.0, 1e-6, 50).unwrap();

    assert_eq!(solution.status, Status::EvaluationFailed);
    let failure = solution.failure.unwrap();
    assert_eq!(failure.iter, 2);
    assert_eq!(failure.target, Target::Derivative);
}

#[test]
fn failure_on_first_iteration_leaves_empty_trace() {
    let f = Fallible(|x: f64| Err::<f64, _>(OutsideDomain(x)));

    let solution = find_root(&f, &two_x, 1.0, 1e-6, 50).unwrap();

    assert_eq!(solution.status, Status::EvaluationFailed);
    assert_eq!(solution.iters, 0);
    assert!(solution.trace.is_empty());
    assert_eq!(solution.x, 1.0);
    assert_eq!(solution.failure.unwrap().iter, 1);
}

#[test]
fn non_finite_values_are_not_errors() {
    let f = |_: f64| f64::NAN;
    let df = |_: f64| 1.0;

    let solution = find_root(&f, &df, 1.0, 1e-6, 5).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!(solution.x.is_nan());
}

#[test]
fn observer_can_stop_early() {
    let mut steps = 0;
    let observer = |event: &Event<'_>| {
        if let Event::Step { .. } = event {
            steps += 1;
        }
        (steps == 2).then_some(Action::StopEarly)
    };

    let config = Config::new(1e-12, 50).unwrap();
    let solution = solve(&square_minus_four, &two_x, 10.0, &config, observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.x, solution.trace[1].next_x());
}

#[test]
fn convergence_wins_over_stop_request_on_same_step() {
    let f = |x: f64| x - 1.0;
    let df = |_: f64| 1.0;
    let config = Config::new(1e-6, 10).unwrap();
    let always_stop = |_: &Event<'_>| Some(Action::StopEarly);

    let solution = solve(&f, &df, 1.0, &config, always_stop).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.converged());
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.last().unwrap().error(), 0.0);

    // From 3.0 the first step has error 2.0, so the stop request applies.
    let solution = solve(&f, &df, 3.0, &config, always_stop).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, 1.0);
}

#[test]
fn observer_sees_every_step_and_guard_flags() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        if let Some(record) = event.record() {
            assert_eq!(event.x(), record.x());
            seen.push((event.iter(), record.is_guarded()));
        }
        None
    };

    let f = |x: f64| x * x + 1.0;
    let config = Config::new(1e-6, 3).unwrap();
    let solution = solve(&f, &two_x, 1.0, &config, observer).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(seen, vec![(1, false), (2, true), (3, false)]);
}

#[test]
fn observer_sees_evaluation_failure_once() {
    let mut failures = Vec::new();
    let observer = |event: &Event<'_>| {
        if let Event::EvaluationFailed { target, error, .. } = event {
            failures.push((event.iter(), event.x(), *target, error.to_string()));
        }
        // Ignored: the run is already over.
        Some(Action::StopEarly)
    };

    let f = Fallible(|x: f64| {
        if x < 0.0 {
            Err(OutsideDomain(x))
        } else {
            Ok(x - 1.0)
        }
    });
    let df = |_: f64| 1.0;

    let solution = solve(&f, &df, -1.0, &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::EvaluationFailed);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 1);
    assert_eq!(failures[0].1, -1.0);
    assert_eq!(failures[0].2, Target::Function);
    assert_eq!(failures[0].3, "outside domain at x = -1");
}

#[test]
fn batch_runs_are_independent_and_ordered() {
    let config = Config::new(1e-10, 100).unwrap();
    let guesses = [3.0, -3.0, 0.5, f64::NAN];

    let results = solve_batch(&square_minus_four, &two_x, &guesses, &config);

    assert_eq!(results.len(), 4);

    let roots: Vec<f64> = results[..3]
        .iter()
        .map(|result| result.as_ref().unwrap().x)
        .collect();
    assert_relative_eq!(roots[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(roots[1], -2.0, epsilon = 1e-10);
    assert_relative_eq!(roots[2], 2.0, epsilon = 1e-10);

    for (result, &x0) in results[..3].iter().zip(&guesses) {
        assert_eq!(result.as_ref().unwrap().trace[0].x(), x0);
    }

    assert!(matches!(results[3], Err(Error::NonFiniteGuess { .. })));
}
