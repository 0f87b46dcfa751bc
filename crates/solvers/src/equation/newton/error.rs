use thiserror::Error;

use super::ConfigError;

/// Errors that reject a Newton run before its first iteration.
///
/// Failures during iteration are not errors; see
/// [`Status::EvaluationFailed`](super::Status::EvaluationFailed).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },
}
