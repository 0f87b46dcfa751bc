//! Root-finding solvers for the Tangent toolkit.
//!
//! Solvers work with any [`Function`] and report their progress to an
//! [`Observer`]. See [`equation`] for the available methods.
//!
//! [`Function`]: tangent_core::Function
//! [`Observer`]: tangent_core::Observer

pub mod equation;
