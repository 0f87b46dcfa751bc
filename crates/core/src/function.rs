use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Solvers only need to evaluate a function at a point. How the function is
/// produced (a closure, a parsed expression, a symbolic derivative) is up to
/// the implementor.
///
/// Evaluation may fail where the function is undefined, such as a division
/// by zero inside the function itself. Returning a non-finite value is not a
/// failure; solvers treat it like any other value.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Plain closures are infallible functions.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for closures that can fail to evaluate.
///
/// # Example
///
/// ```
/// use tangent_core::{Fallible, Function};
///
/// #[derive(Debug)]
/// struct Undefined;
///
/// impl std::fmt::Display for Undefined {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "undefined")
///     }
/// }
///
/// impl std::error::Error for Undefined {}
///
/// let reciprocal = Fallible(|x: f64| if x == 0.0 { Err(Undefined) } else { Ok(1.0 / x) });
///
/// assert_eq!(reciprocal.call(2.0).unwrap(), 0.5);
/// assert!(reciprocal.call(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("log undefined at {0}")]
    struct LogDomain(f64);

    fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, F::Error> {
        f.call(x)
    }

    #[test]
    fn closure_is_infallible_function() {
        let square = |x: f64| x * x;
        assert_relative_eq!(evaluate(&square, 3.0).unwrap(), 9.0);
    }

    #[test]
    fn fn_pointer_is_function() {
        let sine: fn(f64) -> f64 = f64::sin;
        assert_relative_eq!(evaluate(&sine, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn fallible_propagates_errors() {
        let ln = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(LogDomain(x)) });

        assert_relative_eq!(evaluate(&ln, 1.0).unwrap(), 0.0);
        let err = evaluate(&ln, -1.0).unwrap_err();
        assert_eq!(err.to_string(), "log undefined at -1");
    }

    #[test]
    fn non_finite_values_are_not_errors() {
        let reciprocal = |x: f64| 1.0 / x;
        assert!(evaluate(&reciprocal, 0.0).unwrap().is_infinite());
    }
}
