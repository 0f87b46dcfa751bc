use thiserror::Error;

/// Errors produced while parsing an expression.
///
/// Positions are 0-based character offsets into the input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression at position {pos}")]
    UnexpectedEnd { pos: usize },

    #[error("unknown identifier '{name}' at position {pos} (the variable is 'x')")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("unclosed parenthesis opened at position {pos}")]
    UnclosedParen { pos: usize },

    #[error("unmatched ')' at position {pos}")]
    UnmatchedParen { pos: usize },

    #[error("expression nests deeper than {} levels at position {pos}", crate::MAX_DEPTH)]
    TooDeep { pos: usize },
}

impl ParseError {
    /// Returns the character offset the error points at, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::UnexpectedChar { pos, .. }
            | Self::InvalidNumber { pos, .. }
            | Self::UnexpectedToken { pos, .. }
            | Self::UnexpectedEnd { pos }
            | Self::UnknownIdentifier { pos, .. }
            | Self::UnknownFunction { pos, .. }
            | Self::UnclosedParen { pos }
            | Self::UnmatchedParen { pos }
            | Self::TooDeep { pos } => Some(*pos),
        }
    }
}

/// Errors produced while evaluating an expression.
///
/// Only mathematically undefined operations are errors. Overflow and other
/// non-finite results follow IEEE-754 and are returned as values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of non-positive value {arg}")]
    LogDomain { arg: f64 },

    #[error("square root of negative value {arg}")]
    SqrtDomain { arg: f64 },
}
