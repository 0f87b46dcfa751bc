use clap::Parser;

use crate::input::{parse_max_iter, parse_tolerance, parse_x0};

/// Find a root of f(x) with the Newton-Raphson method.
///
/// Any value not given on the command line is asked for interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "newton", version)]
pub struct Args {
    /// The function f(x), using `x` as the variable (e.g. "x^2 - 4")
    #[arg(short, long)]
    pub function: Option<String>,

    /// Initial guess
    #[arg(long, value_parser = parse_x0, allow_negative_numbers = true)]
    pub x0: Option<f64>,

    /// Convergence tolerance on |x_(n+1) - x_n| (e.g. 1e-5)
    #[arg(long, value_parser = parse_tolerance, allow_negative_numbers = true)]
    pub tol: Option<f64>,

    /// Maximum number of iterations
    #[arg(long = "max-iter", value_parser = parse_max_iter, allow_negative_numbers = true)]
    pub max_iter: Option<usize>,

    /// Solve once and exit instead of offering to find another root
    #[arg(long)]
    pub once: bool,

    /// Show the function, derivative and convergence plots after solving
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,
}

impl Args {
    /// Returns true if plots were requested.
    #[must_use]
    pub fn plot(&self) -> bool {
        #[cfg(feature = "plot")]
        {
            self.plot
        }
        #[cfg(not(feature = "plot"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "newton",
            "-f",
            "x^2 - 4",
            "--x0",
            "-3",
            "--tol",
            "1e-6",
            "--max-iter",
            "50",
            "--once",
        ])
        .unwrap();

        assert_eq!(args.function.as_deref(), Some("x^2 - 4"));
        assert_eq!(args.x0, Some(-3.0));
        assert_eq!(args.tol, Some(1e-6));
        assert_eq!(args.max_iter, Some(50));
        assert!(args.once);
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::try_parse_from(["newton"]).unwrap();
        assert!(args.function.is_none());
        assert!(args.x0.is_none());
        assert!(!args.once);
        assert!(!args.plot());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Args::try_parse_from(["newton", "--tol", "-1"]).is_err());
        assert!(Args::try_parse_from(["newton", "--tol", "0"]).is_err());
        assert!(Args::try_parse_from(["newton", "--max-iter", "0"]).is_err());
        assert!(Args::try_parse_from(["newton", "--x0", "abc"]).is_err());
    }
}
