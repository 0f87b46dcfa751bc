use std::fmt;

use crate::{BinaryOp, Expr};

/// Binding power used for parenthesization; unary minus sits between
/// products and powers.
const NEG_PREC: u8 = 3;
const ATOM_PREC: u8 = 5;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Self::Num(n) if n.is_sign_negative() => NEG_PREC,
            Self::Num(_) | Self::Const(_) | Self::X | Self::Call { .. } => ATOM_PREC,
            Self::Neg(_) => NEG_PREC,
            Self::Binary { op, .. } => op.precedence(),
        }
    }
}

/// Renders with the fewest parentheses that parse back to the same tree.
///
/// Powers use `^`; other binary operators are spaced: `3 * x^2 - 2`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Const(c) => f.write_str(c.name()),
            Self::X => f.write_str("x"),
            Self::Neg(a) => {
                f.write_str("-")?;
                write_operand(f, a, a.precedence() < NEG_PREC)
            }
            Self::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                let right_assoc = op.is_right_assoc();

                let lhs_parens =
                    lhs.precedence() < prec || (right_assoc && lhs.precedence() == prec);
                let rhs_parens = rhs.precedence() < prec
                    || (matches!(op, BinaryOp::Sub | BinaryOp::Div) && rhs.precedence() == prec);

                write_operand(f, lhs, lhs_parens)?;
                if right_assoc {
                    f.write_str(op.symbol())?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                write_operand(f, rhs, rhs_parens)
            }
            Self::Call { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

#[cfg(test)]
mod tests {
    use crate::Expr;

    fn render(input: &str) -> String {
        Expr::parse(input).unwrap().to_string()
    }

    #[test]
    fn minimal_parentheses() {
        assert_eq!(render("(x + 1) * (x - 1)"), "(x + 1) * (x - 1)");
        assert_eq!(render("x + (1 * 2)"), "x + 1 * 2");
        assert_eq!(render("x - (1 - 2)"), "x - (1 - 2)");
        assert_eq!(render("(x - 1) - 2"), "x - 1 - 2");
        assert_eq!(render("x / (2 * x)"), "x / (2 * x)");
        assert_eq!(render("(2^3)^2"), "(2^3)^2");
        assert_eq!(render("2^(3^2)"), "2^3^2");
        assert_eq!(render("(-x)^2"), "(-x)^2");
        assert_eq!(render("-(x^2)"), "-x^2");
        assert_eq!(render("-(2 * x)"), "-(2 * x)");
        assert_eq!(render("x^(-1)"), "x^(-1)");
    }

    #[test]
    fn functions_and_constants() {
        assert_eq!(render("sin(2 * pi * x)"), "sin(2 * pi * x)");
        assert_eq!(render("ln(x) + log(e)"), "log(x) + log(e)");
        assert_eq!(render("x**2"), "x^2");
    }

    #[test]
    fn rendered_text_parses_back() {
        for input in [
            "-(x + 1)^3 / (2 - x)",
            "2^-x^2",
            "exp(-x) * sqrt(abs(x - 1))",
            "x - (x - (x - 1))",
        ] {
            let expr = Expr::parse(input).unwrap();
            assert_eq!(Expr::parse(&expr.to_string()).unwrap(), expr, "{input}");
        }
    }
}
