//! Simplifying constructors.
//!
//! Each constructor folds numeric literals and drops identity elements as it
//! builds a node. Named constants are never folded, so `2 * pi` stays
//! symbolic. Rebuilding a tree bottom-up through these constructors is what
//! [`Expr::simplify`] does.

use crate::{BinaryOp, Expr, Func, eval};

impl Expr {
    /// Returns a simplified copy of this expression.
    ///
    /// Folds arithmetic on numeric literals and removes identities such as
    /// `0 + a`, `1 * a`, `a^1` and `--a`. The result evaluates to the same
    /// value wherever the unsimplified expression is defined.
    #[must_use]
    pub fn simplify(&self) -> Expr {
        match self {
            Self::Num(_) | Self::Const(_) | Self::X => self.clone(),
            Self::Neg(a) => neg(a.simplify()),
            Self::Binary { op, lhs, rhs } => {
                let (l, r) = (lhs.simplify(), rhs.simplify());
                match op {
                    BinaryOp::Add => add(l, r),
                    BinaryOp::Sub => sub(l, r),
                    BinaryOp::Mul => mul(l, r),
                    BinaryOp::Div => div(l, r),
                    BinaryOp::Pow => pow(l, r),
                }
            }
            Self::Call { func, arg } => call(*func, arg.simplify()),
        }
    }

    fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }
}

fn raw(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub(crate) fn num(n: f64) -> Expr {
    Expr::Num(n)
}

pub(crate) fn neg(a: Expr) -> Expr {
    match a {
        Expr::Num(n) => Expr::Num(-n),
        Expr::Neg(inner) => *inner,
        other => Expr::Neg(Box::new(other)),
    }
}

pub(crate) fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(l), Some(r)) => num(l + r),
        (Some(l), _) if l == 0.0 => rhs,
        (_, Some(r)) if r == 0.0 => lhs,
        (_, Some(r)) if r < 0.0 => raw(BinaryOp::Sub, lhs, num(-r)),
        _ => match rhs {
            Expr::Neg(inner) => raw(BinaryOp::Sub, lhs, *inner),
            rhs => raw(BinaryOp::Add, lhs, rhs),
        },
    }
}

pub(crate) fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(l), Some(r)) => num(l - r),
        (_, Some(r)) if r == 0.0 => lhs,
        (Some(l), _) if l == 0.0 => neg(rhs),
        (_, Some(r)) if r < 0.0 => raw(BinaryOp::Add, lhs, num(-r)),
        _ if lhs == rhs => num(0.0),
        _ => match rhs {
            Expr::Neg(inner) => raw(BinaryOp::Add, lhs, *inner),
            rhs => raw(BinaryOp::Sub, lhs, rhs),
        },
    }
}

pub(crate) fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(l), Some(r)) => num(l * r),
        (Some(l), _) if l == 0.0 => num(0.0),
        (_, Some(r)) if r == 0.0 => num(0.0),
        (Some(l), _) if l == 1.0 => rhs,
        (_, Some(r)) if r == 1.0 => lhs,
        (Some(l), _) if l == -1.0 => neg(rhs),
        (_, Some(r)) if r == -1.0 => neg(lhs),
        // Keep numeric coefficients on the left: `x * 2` becomes `2 * x`.
        (None, Some(_)) => mul(rhs, lhs),
        _ => match (lhs, rhs) {
            (Expr::Neg(l), r) => neg(mul(*l, r)),
            (l, Expr::Neg(r)) => neg(mul(l, *r)),
            (l, r) => raw(BinaryOp::Mul, l, r),
        },
    }
}

pub(crate) fn div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_num(), rhs.as_num()) {
        (Some(l), Some(r)) if r != 0.0 => num(l / r),
        (_, Some(r)) if r == 1.0 => lhs,
        (_, Some(r)) if r == -1.0 => neg(lhs),
        _ => match (lhs, rhs) {
            (Expr::Neg(l), r) => neg(div(*l, r)),
            (l, r) => raw(BinaryOp::Div, l, r),
        },
    }
}

pub(crate) fn pow(base: Expr, exp: Expr) -> Expr {
    match (base.as_num(), exp.as_num()) {
        (_, Some(e)) if e == 0.0 => num(1.0),
        (_, Some(e)) if e == 1.0 => base,
        (Some(b), Some(e)) if eval::pow(b, e).is_finite() => num(eval::pow(b, e)),
        (Some(b), _) if b == 1.0 => num(1.0),
        _ => raw(BinaryOp::Pow, base, exp),
    }
}

pub(crate) fn call(func: Func, arg: Expr) -> Expr {
    Expr::Call {
        func,
        arg: Box::new(arg),
    }
}
