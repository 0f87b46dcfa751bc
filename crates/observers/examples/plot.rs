//! Interactive visualizations of Newton-Raphson runs.
//!
//! Each mode solves a simple equation and opens a window showing the function
//! with the tangent steps, its derivative, and the convergence history.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- sqrt2
//! cargo run --example plot --features plot -- cubic
//! cargo run --example plot --features plot -- no-root
//! cargo run --example plot --features plot -- "cos(x) - x" 1.0
//! ```
//!
//! # Modes
//!
//! - **sqrt2** — Solve x² = 2 from x₀ = 1. Quadratic convergence: the error
//!   roughly squares every step.
//!
//! - **cubic** — Newton's own example, x³ − 2x − 5 = 0 from x₀ = 2.
//!
//! - **no-root** — x² + 1 has no real root. The second iterate lands where
//!   the derivative vanishes, the guard kicks in, and the run wanders until
//!   the iteration budget is spent.
//!
//! - **any expression [x0]** — Solve the given expression from `x0`
//!   (default 1).

use std::error::Error;

use tangent_expr::Expr;
use tangent_observers::{IterationTable, newton_plots, termination_message};
use tangent_solvers::equation::newton;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sqrt2".into());
    let (input, x0) = match mode.as_str() {
        "sqrt2" => ("x^2 - 2".to_owned(), 1.0),
        "cubic" => ("x^3 - 2*x - 5".to_owned(), 2.0),
        "no-root" => ("x^2 + 1".to_owned(), 1.0),
        other => {
            let x0 = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()?
                .unwrap_or(1.0);
            (other.to_owned(), x0)
        }
    };

    let f = Expr::parse(&input)?;
    let df = f.derivative();
    println!("f(x)  = {f}");
    println!("f'(x) = {df}");

    let config = newton::Config::new(1e-12, 30)?;
    let solution = newton::solve_unobserved(&f, &df, x0, &config)?;

    println!("{}", termination_message(&solution));
    println!("\n{}", IterationTable::new(&solution.trace));

    newton_plots::show(&f, &df, &solution)?;

    Ok(())
}
