use std::{error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

use super::IterationRecord;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A step shorter than the tolerance was taken.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Evaluating the function or its derivative failed.
    EvaluationFailed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Which of the two functions failed to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The function `f`.
    Function,

    /// The derivative `f'`.
    Derivative,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Derivative => write!(f, "derivative"),
        }
    }
}

/// Where and why evaluation failed.
#[derive(Debug, Clone, Error)]
#[error("{target} evaluation failed at iteration {iter} (x = {x})")]
pub struct EvaluationFailure {
    /// The 1-based iteration that failed.
    pub iter: usize,

    /// The estimate at which evaluation was attempted.
    pub x: f64,

    /// Which function failed.
    pub target: Target,

    /// The error returned by the function.
    #[source]
    pub source: Arc<dyn StdError + Send + Sync>,
}

/// The result of a Newton run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    ///
    /// The last computed `x_{n+1}` when the run converged or was stopped by
    /// an observer; the estimate the failing or final iteration would have
    /// started from otherwise.
    pub x: f64,

    /// Number of iterations recorded in the trace.
    pub iters: usize,

    /// Every completed iteration, in order.
    pub trace: Vec<IterationRecord>,

    /// Set when the status is [`Status::EvaluationFailed`].
    pub failure: Option<EvaluationFailure>,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        x: f64,
        trace: Vec<IterationRecord>,
        failure: Option<EvaluationFailure>,
    ) -> Self {
        Self {
            status,
            x,
            iters: trace.len(),
            trace,
            failure,
        }
    }

    /// Returns true if the run converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the last recorded iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.trace.last()
    }

    /// Returns the iterations whose slope was altered by the derivative guard.
    pub fn guarded_steps(&self) -> impl Iterator<Item = &IterationRecord> {
        self.trace.iter().filter(|record| record.is_guarded())
    }
}
