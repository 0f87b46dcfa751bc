//! Core traits for the Tangent root-finding toolkit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! function providers build on:
//!
//! - [`Function`] — a scalar map `f64 -> f64` that may fail to evaluate
//! - [`Fallible`] — adapts a closure returning `Result` into a [`Function`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function};
pub use observer::Observer;
