use thiserror::Error;

use super::DerivativeGuard;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    guard: DerivativeGuard,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tolerance,

    #[error("max_iters must be positive")]
    MaxIters,

    #[error("guard threshold must be finite and non-negative")]
    GuardThreshold,

    #[error("guard perturbation must be finite and positive")]
    GuardPerturbation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iters: 100,
            guard: DerivativeGuard::default(),
        }
    }
}

impl Config {
    /// Creates a new config with the default derivative guard.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tol,
            max_iters,
            guard: DerivativeGuard::default(),
        })
    }

    /// Replaces the derivative guard.
    #[must_use]
    pub fn with_guard(mut self, guard: DerivativeGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Returns the step tolerance; a step shorter than this converges.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the derivative guard.
    #[must_use]
    pub fn guard(&self) -> DerivativeGuard {
        self.guard
    }
}
