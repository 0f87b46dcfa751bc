//! Interactive Newton-Raphson root finder.
//!
//! The `newton` binary asks for a function, an initial guess, a tolerance and
//! an iteration limit (or takes them from flags), runs the solver, and prints
//! a summary and the iteration table. It keeps offering to find another root
//! until the user declines.
//!
//! The pieces are exposed as a library so they can be driven from tests:
//!
//! - [`args`] — command-line flags
//! - [`input`] — parsing and validation of user-provided values
//! - [`prompt`] — question/answer loop over any [`BufRead`]/[`Write`] pair
//! - [`session`] — one or more solve rounds
//!
//! [`BufRead`]: std::io::BufRead
//! [`Write`]: std::io::Write

pub mod args;
pub mod input;
pub mod prompt;
pub mod session;

pub use args::Args;
pub use input::InputError;
pub use prompt::{PromptError, Prompter};
