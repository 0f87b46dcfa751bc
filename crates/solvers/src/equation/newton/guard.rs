use super::ConfigError;

/// Keeps Newton steps bounded when the derivative nearly vanishes.
///
/// A derivative with magnitude below `threshold` is replaced by a slope
/// pushed `perturbation` further from zero, keeping its sign (zero counts as
/// positive). Both values are tunable; the defaults are `1e-10`.
///
/// A threshold of zero disables the guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeGuard {
    threshold: f64,
    perturbation: f64,
}

impl Default for DerivativeGuard {
    fn default() -> Self {
        Self {
            threshold: 1e-10,
            perturbation: 1e-10,
        }
    }
}

impl DerivativeGuard {
    /// Creates a guard with the given threshold and perturbation.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is negative or non-finite, or if
    /// `perturbation` is not finite and positive.
    pub fn new(threshold: f64, perturbation: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::GuardThreshold);
        }
        if !perturbation.is_finite() || perturbation <= 0.0 {
            return Err(ConfigError::GuardPerturbation);
        }
        Ok(Self {
            threshold,
            perturbation,
        })
    }

    /// Returns the magnitude below which a derivative is guarded.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the amount added to a guarded derivative's magnitude.
    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    /// Returns the slope to step with for the given derivative.
    #[must_use]
    pub fn apply(&self, derivative: f64) -> Slope {
        if derivative.abs() >= self.threshold || derivative.is_nan() {
            return Slope::Exact(derivative);
        }

        if derivative >= 0.0 {
            Slope::Guarded(derivative + self.perturbation)
        } else {
            Slope::Guarded(derivative - self.perturbation)
        }
    }
}

/// The slope used for a Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// The derivative as evaluated.
    Exact(f64),
    /// The derivative pushed away from zero by the guard.
    Guarded(f64),
}

impl Slope {
    /// Returns the slope value.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Exact(v) | Self::Guarded(v) => v,
        }
    }

    /// Returns true if the guard modified the derivative.
    #[must_use]
    pub fn is_guarded(self) -> bool {
        matches!(self, Self::Guarded(_))
    }
}
