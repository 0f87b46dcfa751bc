use std::error::Error as StdError;

use super::{IterationRecord, Target};

/// Events emitted by the Newton solver.
pub enum Event<'a> {
    /// An iteration completed and its record was appended to the trace.
    Step {
        /// The record just appended.
        record: &'a IterationRecord,
    },

    /// Evaluating `f` or `f'` failed; the run ends after this event.
    EvaluationFailed {
        /// The 1-based iteration that failed.
        iter: usize,

        /// The estimate at which evaluation was attempted.
        x: f64,

        /// Which function failed.
        target: Target,

        /// The error returned by the function.
        error: &'a (dyn StdError + Send + Sync),
    },
}

impl Event<'_> {
    /// Returns the 1-based iteration this event belongs to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Step { record } => record.iter(),
            Self::EvaluationFailed { iter, .. } => *iter,
        }
    }

    /// Returns the estimate `x_n` the iteration started from.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Step { record } => record.x(),
            Self::EvaluationFailed { x, .. } => *x,
        }
    }

    /// Returns the record for a completed step.
    #[must_use]
    pub fn record(&self) -> Option<&IterationRecord> {
        match self {
            Self::Step { record } => Some(record),
            Self::EvaluationFailed { .. } => None,
        }
    }
}
