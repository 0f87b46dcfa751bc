use crate::{BinaryOp, EvalError, Expr, Func};

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] for division by zero, the logarithm of a
    /// non-positive value, or the square root of a negative value.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Num(n) => Ok(*n),
            Self::Const(c) => Ok(c.value()),
            Self::X => Ok(x),
            Self::Neg(a) => Ok(-a.eval(x)?),
            Self::Binary { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                binary(*op, l, r)
            }
            Self::Call { func, arg } => call(*func, arg.eval(x)?),
        }
    }
}

fn binary(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(l + r),
        BinaryOp::Sub => Ok(l - r),
        BinaryOp::Mul => Ok(l * r),
        BinaryOp::Div if r == 0.0 => Err(EvalError::DivisionByZero),
        BinaryOp::Div => Ok(l / r),
        BinaryOp::Pow => Ok(pow(l, r)),
    }
}

/// Raises `base` to `exp`, using exact repeated multiplication for small
/// integer exponents.
pub(crate) fn pow(base: f64, exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp.abs() <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)]
        let n = exp as i32;
        base.powi(n)
    } else {
        base.powf(exp)
    }
}

fn call(func: Func, a: f64) -> Result<f64, EvalError> {
    match func {
        Func::Sin => Ok(a.sin()),
        Func::Cos => Ok(a.cos()),
        Func::Tan => Ok(a.tan()),
        Func::Exp => Ok(a.exp()),
        Func::Ln if a <= 0.0 => Err(EvalError::LogDomain { arg: a }),
        Func::Ln => Ok(a.ln()),
        Func::Sqrt if a < 0.0 => Err(EvalError::SqrtDomain { arg: a }),
        Func::Sqrt => Ok(a.sqrt()),
        Func::Abs => Ok(a.abs()),
        Func::Sign if a == 0.0 || a.is_nan() => Ok(a),
        Func::Sign => Ok(a.signum()),
    }
}
