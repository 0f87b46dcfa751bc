use crate::{
    BinaryOp, Constant, Expr, Func,
    simplify::{add, call, div, mul, neg, num, pow, sub},
};

impl Expr {
    /// Returns the symbolic derivative with respect to `x`, simplified.
    ///
    /// Uses the sum, product, quotient, power and chain rules. A power with
    /// a constant exponent uses the power rule, a constant base uses the
    /// exponential rule, and the general `u^v` case uses
    /// `u^v * (v' * ln(u) + v * u' / u)`.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        match self {
            Self::Num(_) | Self::Const(_) => num(0.0),
            Self::X => num(1.0),
            Self::Neg(a) => neg(a.derivative()),
            Self::Binary { op, lhs, rhs } => binary(*op, lhs, rhs),
            Self::Call { func, arg } => chain(*func, arg),
        }
    }
}

fn binary(op: BinaryOp, u: &Expr, v: &Expr) -> Expr {
    let du = u.derivative();
    let dv = v.derivative();
    match op {
        BinaryOp::Add => add(du, dv),
        BinaryOp::Sub => sub(du, dv),
        BinaryOp::Mul => add(mul(du, v.simplify()), mul(u.simplify(), dv)),
        BinaryOp::Div => div(
            sub(mul(du, v.simplify()), mul(u.simplify(), dv)),
            pow(v.simplify(), num(2.0)),
        ),
        BinaryOp::Pow => power(u, v, du, dv),
    }
}

fn power(u: &Expr, v: &Expr, du: Expr, dv: Expr) -> Expr {
    let (u, v) = (u.simplify(), v.simplify());
    if v.is_constant() {
        let reduced = pow(u, sub(v.clone(), num(1.0)));
        mul(mul(v, reduced), du)
    } else if u.is_constant() {
        let scale = if u == Expr::Const(Constant::E) {
            num(1.0)
        } else {
            call(Func::Ln, u.clone())
        };
        mul(mul(pow(u, v), scale), dv)
    } else {
        let inner = add(
            mul(dv, call(Func::Ln, u.clone())),
            div(mul(v.clone(), du), u.clone()),
        );
        mul(pow(u, v), inner)
    }
}

fn chain(func: Func, u: &Expr) -> Expr {
    let du = u.derivative();
    let u = u.simplify();
    match func {
        Func::Sin => mul(call(Func::Cos, u), du),
        Func::Cos => neg(mul(call(Func::Sin, u), du)),
        Func::Tan => div(du, pow(call(Func::Cos, u), num(2.0))),
        Func::Exp => mul(call(Func::Exp, u), du),
        Func::Ln => div(du, u),
        Func::Sqrt => div(du, mul(num(2.0), call(Func::Sqrt, u))),
        Func::Abs => mul(call(Func::Sign, u), du),
        Func::Sign => num(0.0),
    }
}
