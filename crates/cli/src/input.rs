//! Parsing and validation of user-provided values.
//!
//! The same parsers back the command-line flags and the interactive prompts,
//! so a value is accepted or rejected the same way regardless of where it
//! comes from.

use tangent_expr::{Expr, ParseError};
use thiserror::Error;

/// A rejected input value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid mathematical expression: {0}")]
    Function(#[from] ParseError),

    #[error("Invalid number '{0}'. Please enter a valid numeric value")]
    Number(String),

    #[error("Invalid number '{0}'. Please enter a valid integer value")]
    Integer(String),

    #[error("The initial guess must be a finite number")]
    NonFinite,

    #[error("Tolerance must be positive")]
    Tolerance,

    #[error("Number of iterations must be positive")]
    MaxIter,
}

/// Parses a function of `x`.
///
/// # Errors
///
/// Returns [`InputError::Function`] with the parser's positioned error.
pub fn parse_function(text: &str) -> Result<Expr, InputError> {
    Ok(Expr::parse(text.trim())?)
}

/// Parses a finite initial guess.
///
/// # Errors
///
/// Returns an error if `text` is not a number or is not finite.
pub fn parse_x0(text: &str) -> Result<f64, InputError> {
    let x0 = parse_float(text)?;
    if x0.is_finite() {
        Ok(x0)
    } else {
        Err(InputError::NonFinite)
    }
}

/// Parses a positive, finite tolerance.
///
/// # Errors
///
/// Returns an error if `text` is not a number or is not positive.
pub fn parse_tolerance(text: &str) -> Result<f64, InputError> {
    let tol = parse_float(text)?;
    if tol > 0.0 && tol.is_finite() {
        Ok(tol)
    } else {
        Err(InputError::Tolerance)
    }
}

/// Parses a positive iteration limit.
///
/// # Errors
///
/// Returns an error if `text` is not an integer or is not positive.
pub fn parse_max_iter(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    let n: i64 = text
        .parse()
        .map_err(|_| InputError::Integer(text.to_owned()))?;
    usize::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(InputError::MaxIter)
}

fn parse_float(text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InputError::Number(text.to_owned()))
}
