//! Newton-Raphson root finding with a full iteration trace.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x₀`, each iteration follows the tangent
//! line of `f` at the current estimate down to zero:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The step error `|x_{n+1} - x_n|` is compared against the configured
//! tolerance; the run converges as soon as it drops strictly below it.
//!
//! # Derivative guard
//!
//! When `|f'(x_n)|` falls below the [`DerivativeGuard`] threshold, the slope
//! is pushed away from zero by the guard's perturbation (keeping its sign,
//! with zero treated as positive) instead of dividing by a vanishing
//! derivative. Guarded steps are flagged on their [`IterationRecord`] and
//! logged as warnings, so callers can tell them apart from true Newton steps.
//!
//! # Termination
//!
//! - [`Status::Converged`] — step error below tolerance; `x` is `x_{n+1}`
//! - [`Status::MaxIters`] — budget exhausted; `x` is the last estimate
//! - [`Status::EvaluationFailed`] — `f` or `f'` returned an error; the trace
//!   accumulated so far is kept and [`Solution::failure`] says where
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//!   on a step that had not converged
//!
//! Invalid configuration or a non-finite initial guess is rejected with an
//! [`Error`] before the first evaluation.
//!
//! # Observer Events
//!
//! - [`Event::Step`] — emitted after every record is appended to the trace
//! - [`Event::EvaluationFailed`] — emitted once when evaluation fails; any
//!   returned action is ignored since the run is already over

mod action;
mod batch;
mod config;
mod error;
mod event;
mod guard;
mod record;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use batch::solve_batch;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use guard::{DerivativeGuard, Slope};
pub use record::IterationRecord;
pub use solution::{EvaluationFailure, Solution, Status, Target};

use std::sync::Arc;

use tangent_core::{Function, Observer};

/// Finds a root of `f` starting from `x0`.
///
/// This is the plain form of [`solve`]: it builds a [`Config`] from `tol` and
/// `max_iters` with the default [`DerivativeGuard`] and runs unobserved.
///
/// # Errors
///
/// Returns an error if `tol` is not a positive finite number, `max_iters` is
/// zero, or `x0` is not finite. Evaluation failures are not errors; they are
/// reported through [`Solution::status`] and [`Solution::failure`].
pub fn find_root<F, D>(
    f: &F,
    f_prime: &D,
    x0: f64,
    tol: f64,
    max_iters: usize,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    let config = Config::new(tol, max_iters)?;
    solve_unobserved(f, f_prime, x0, &config)
}

/// Runs Newton-Raphson iteration on `f` from `x0`.
///
/// The observer receives an [`Event`] for each recorded iteration and for an
/// evaluation failure. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
pub fn solve<F, D, Obs>(
    f: &F,
    f_prime: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut trace: Vec<IterationRecord> = Vec::new();
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let (value, derivative) = match evaluate(f, f_prime, x) {
            Ok(pair) => pair,
            Err((target, source)) => {
                log::warn!("{target} evaluation failed at iteration {iter} (x = {x}): {source}");
                let event = Event::EvaluationFailed {
                    iter,
                    x,
                    target,
                    error: &*source,
                };
                let _ = observer.observe(&event);

                let failure = EvaluationFailure {
                    iter,
                    x,
                    target,
                    source,
                };
                return Ok(Solution::new(
                    Status::EvaluationFailed,
                    x,
                    trace,
                    Some(failure),
                ));
            }
        };

        let slope = config.guard().apply(derivative);
        if slope.is_guarded() {
            log::warn!(
                "derivative {derivative:e} is near zero at x = {x} (iteration {iter}); \
                 stepping with slope {:e}",
                slope.value()
            );
        }

        let next_x = x - value / slope.value();
        let record = IterationRecord::new(iter, x, value, derivative, slope, next_x);
        log::debug!(
            "iteration {iter}: x = {x}, f(x) = {value}, f'(x) = {derivative}, error = {}",
            record.error()
        );
        trace.push(record);

        let action = observer.observe(&Event::Step { record: &record });

        // Convergence takes precedence over a stop request on the same step.
        if record.error() < config.tol() {
            log::info!("converged to {next_x} after {iter} iterations");
            return Ok(Solution::new(Status::Converged, next_x, trace, None));
        }

        if let Some(Action::StopEarly) = action {
            log::info!("stopped by observer after {iter} iterations at x = {next_x}");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                next_x,
                trace,
                None,
            ));
        }

        x = next_x;
    }

    log::info!(
        "maximum iterations ({}) reached; best approximation {x}",
        config.max_iters()
    );
    Ok(Solution::new(Status::MaxIters, x, trace, None))
}

/// Runs Newton-Raphson iteration without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteGuess`] if `x0` is NaN or infinite.
pub fn solve_unobserved<F, D>(
    f: &F,
    f_prime: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, f_prime, x0, config, ())
}

type Failure = (Target, Arc<dyn std::error::Error + Send + Sync>);

/// Evaluates the function and its derivative at `x`, tagging any failure.
fn evaluate<F, D>(f: &F, f_prime: &D, x: f64) -> Result<(f64, f64), Failure>
where
    F: Function,
    D: Function,
{
    let value = f.call(x).map_err(|err| failure(Target::Function, err))?;
    let derivative = f_prime
        .call(x)
        .map_err(|err| failure(Target::Derivative, err))?;
    Ok((value, derivative))
}

fn failure<E>(target: Target, err: E) -> Failure
where
    E: std::error::Error + Send + Sync + 'static,
{
    let source: Arc<dyn std::error::Error + Send + Sync> = Arc::new(err);
    (target, source)
}
