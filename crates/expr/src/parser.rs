//! Pratt parser: turns a token stream into an [`Expr`] tree.
//!
//! Binary operators are handled by precedence climbing instead of one
//! grammar rule per level. Unary minus sits between `*` and `^`, so `-x^2`
//! parses as `-(x^2)` and `2^-x` as `2^(-x)`.

use crate::{
    BinaryOp, Constant, Expr, Func, ParseError,
    token::{Spanned, Token},
};

/// Binding power for the operand of a unary sign.
const UNARY_BP: u8 = 3;

/// Deepest nesting accepted, counted both as parser recursion (parentheses,
/// signs, right-hand operands) and as height of the resulting tree.
///
/// Evaluation, differentiation, and dropping an [`Expr`] all recurse over the
/// tree, so its height has to stay well within the stack.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree together with its height.
type Parsed = (Expr, usize);

pub(crate) struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Result<Expr, ParseError> {
        if self.peek() == &Token::Eof {
            return Err(ParseError::Empty);
        }

        let (expr, _) = self.parse_expr(0)?;
        match self.peek() {
            Token::Eof => Ok(expr),
            Token::RParen => Err(ParseError::UnmatchedParen {
                pos: self.peek_pos(),
            }),
            _ => Err(self.unexpected()),
        }
    }

    /// Precedence climbing entry point.
    ///
    /// Keeps consuming infix operators whose precedence is at least `min_bp`.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Parsed, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                pos: self.peek_pos(),
            });
        }
        self.depth += 1;
        let parsed = self.parse_infix(min_bp);
        self.depth -= 1;
        parsed
    }

    fn parse_infix(&mut self, min_bp: u8) -> Result<Parsed, ParseError> {
        let (mut lhs, mut height) = self.parse_prefix()?;

        loop {
            let op = match self.peek() {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                Token::Caret => BinaryOp::Pow,
                _ => break,
            };

            let prec = op.precedence();
            if prec < min_bp {
                break;
            }
            let op_pos = self.peek_pos();
            self.advance();

            let next_bp = if op.is_right_assoc() { prec } else { prec + 1 };
            let (rhs, rhs_height) = self.parse_expr(next_bp)?;

            height = grow(height.max(rhs_height), op_pos)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok((lhs, height))
    }

    /// Parses a unary sign or an atom.
    fn parse_prefix(&mut self) -> Result<Parsed, ParseError> {
        match self.peek() {
            Token::Minus => {
                let pos = self.peek_pos();
                self.advance();
                let (operand, height) = self.parse_expr(UNARY_BP)?;
                Ok((Expr::Neg(Box::new(operand)), grow(height, pos)?))
            }
            Token::Plus => {
                self.advance();
                self.parse_expr(UNARY_BP)
            }
            _ => self.parse_atom(),
        }
    }

    /// Parses numbers, names, function calls and parenthesized groups.
    fn parse_atom(&mut self) -> Result<Parsed, ParseError> {
        let pos = self.peek_pos();
        match self.peek().clone() {
            Token::Number(n) => {
                self.advance();
                Ok((Expr::Num(n), 1))
            }
            Token::Ident(name) => {
                self.advance();
                if self.peek() == &Token::LParen {
                    let func = Func::from_name(&name)
                        .ok_or(ParseError::UnknownFunction { name, pos })?;
                    let (arg, height) = self.parse_group()?;
                    let call = Expr::Call {
                        func,
                        arg: Box::new(arg),
                    };
                    Ok((call, grow(height, pos)?))
                } else if name == "x" {
                    Ok((Expr::X, 1))
                } else if let Some(constant) = Constant::from_name(&name) {
                    Ok((Expr::Const(constant), 1))
                } else {
                    Err(ParseError::UnknownIdentifier { name, pos })
                }
            }
            Token::LParen => self.parse_group(),
            Token::Eof => Err(ParseError::UnexpectedEnd { pos }),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses `( expr )`, starting at the opening parenthesis.
    fn parse_group(&mut self) -> Result<Parsed, ParseError> {
        let open = self.peek_pos();
        self.advance();

        if self.peek() == &Token::Eof {
            return Err(ParseError::UnclosedParen { pos: open });
        }
        let inner = self.parse_expr(0)?;

        match self.peek() {
            Token::RParen => {
                self.advance();
                Ok(inner)
            }
            Token::Eof => Err(ParseError::UnclosedParen { pos: open }),
            _ => Err(self.unexpected()),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map_or(&Token::Eof, |s| &s.token)
    }

    fn peek_pos(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(0, |s| s.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.peek().describe(),
            pos: self.peek_pos(),
        }
    }
}

/// Height of a node above a subtree of height `child`.
fn grow(child: usize, pos: usize) -> Result<usize, ParseError> {
    let height = child + 1;
    if height > MAX_DEPTH {
        Err(ParseError::TooDeep { pos })
    } else {
        Ok(height)
    }
}
