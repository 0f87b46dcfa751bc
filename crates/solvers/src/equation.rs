//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson iteration from an initial guess, using the
//!   function and its derivative, with the full iteration trace

pub mod newton;
