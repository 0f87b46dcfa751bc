//! Expressions in one real variable `x`, with symbolic derivatives.
//!
//! An [`Expr`] is parsed from text, evaluated at a point, differentiated
//! symbolically, and rendered back to text. It implements
//! [`tangent_core::Function`], so a parsed expression and its derivative can
//! be handed straight to a solver.
//!
//! # Grammar
//!
//! - numbers, including scientific notation (`1.5e-3`)
//! - the variable `x` and the constants `pi` and `e`
//! - binary `+ - * /` and power `^` (also written `**`)
//! - unary `+` and `-`
//! - parentheses
//! - the functions `sin cos tan exp ln log sqrt abs sign`, where `log` is the
//!   natural logarithm
//!
//! Power is right-associative and binds tighter than unary minus, so
//! `-x^2` is `-(x^2)` and `2^3^2` is `2^(3^2)`.
//!
//! Nesting is limited to [`MAX_DEPTH`] levels; deeper input is rejected with
//! [`ParseError::TooDeep`].
//!
//! # Example
//!
//! ```
//! use tangent_expr::Expr;
//!
//! let f = Expr::parse("x^3 - 2*x + 1").unwrap();
//! let df = f.derivative();
//!
//! assert_eq!(df.to_string(), "3 * x^2 - 2");
//! assert_eq!(f.eval(2.0).unwrap(), 5.0);
//! assert_eq!(df.eval(2.0).unwrap(), 10.0);
//! ```

mod ast;
mod derivative;
mod display;
mod error;
mod eval;
mod parser;
mod simplify;
mod token;

pub use ast::{BinaryOp, Constant, Expr, Func};
pub use error::{EvalError, ParseError};
pub use parser::MAX_DEPTH;
