//! Solve rounds: gather a problem, run Newton-Raphson, report.

use std::io::{BufRead, Write};

use tangent_expr::Expr;
use tangent_observers::{IterationTable, format_root, termination_message};
use tangent_solvers::equation::newton::{self, Solution};

use crate::{
    args::Args,
    input::{parse_function, parse_max_iter, parse_tolerance, parse_x0},
    prompt::{PromptError, Prompter},
};

const RULE: &str = "============================================================";

const FUNCTION_PROMPT: &str = "Enter the function f(x) (use 'x' as the variable, e.g., x**2 - 4): ";
const X0_PROMPT: &str = "Enter the initial guess (x0): ";
const TOL_PROMPT: &str = "Enter the tolerance level (e.g., 1e-5): ";
const MAX_ITER_PROMPT: &str = "Enter the maximum number of iterations: ";
const AGAIN_PROMPT: &str = "Do you want to find another root? (y/n): ";

/// A fully specified root-finding problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub f: Expr,
    pub f_prime: Expr,
    pub x0: f64,
    pub tol: f64,
    pub max_iter: usize,
}

/// Runs rounds until the user declines another one.
///
/// Values given in `args` are used for the first round; anything missing,
/// and everything in later rounds, is asked for through `prompter`.
///
/// # Errors
///
/// Returns an error if the terminal fails, the input closes while a value is
/// still needed, or a value given in `args` is invalid.
pub fn run<R: BufRead, W: Write>(args: &Args, prompter: &mut Prompter<R, W>) -> eyre::Result<()> {
    writeln!(prompter.output(), "{RULE}\nNEWTON-RAPHSON METHOD FOR FINDING ROOTS\n{RULE}")?;

    let mut preset = Some(args);
    loop {
        let problem = read_problem(prompter, preset.take())?;
        let solution = solve(&problem, prompter.output())?;

        if args.plot() {
            show_plots(&problem, &solution, prompter.output())?;
        }

        if args.once {
            break;
        }
        writeln!(prompter.output())?;
        match prompter.confirm(AGAIN_PROMPT) {
            Ok(true) => writeln!(prompter.output())?,
            Ok(false) | Err(PromptError::Closed) => break,
            Err(error) => return Err(error.into()),
        }
    }

    writeln!(prompter.output(), "\nThank you for using the Newton-Raphson Method!")?;
    Ok(())
}

/// Reads a problem, taking values from `preset` where present.
///
/// The function and its derivative are printed as soon as the function is
/// known.
///
/// # Errors
///
/// Returns an error if prompting fails or a preset value is invalid.
pub fn read_problem<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: Option<&Args>,
) -> eyre::Result<Problem> {
    let f = match preset.and_then(|args| args.function.as_deref()) {
        Some(text) => parse_function(text)?,
        None => prompter.ask(FUNCTION_PROMPT, parse_function)?,
    };
    let f_prime = f.derivative();

    let out = prompter.output();
    writeln!(out, "\nFunction: f(x) = {f}")?;
    writeln!(out, "Derivative: f'(x) = {f_prime}")?;
    if let Err(error) = f.eval(0.0) {
        writeln!(out, "Warning: f(x) cannot be evaluated at x = 0 ({error}).")?;
    }
    writeln!(out)?;

    let x0 = match preset.and_then(|args| args.x0) {
        Some(x0) => x0,
        None => prompter.ask(X0_PROMPT, parse_x0)?,
    };
    let tol = match preset.and_then(|args| args.tol) {
        Some(tol) => tol,
        None => prompter.ask(TOL_PROMPT, parse_tolerance)?,
    };
    let max_iter = match preset.and_then(|args| args.max_iter) {
        Some(max_iter) => max_iter,
        None => prompter.ask(MAX_ITER_PROMPT, parse_max_iter)?,
    };

    Ok(Problem {
        f,
        f_prime,
        x0,
        tol,
        max_iter,
    })
}

/// Solves `problem` and writes the report to `out`.
///
/// # Errors
///
/// Returns an error if the problem's parameters are rejected by the solver or
/// writing fails. Evaluation failures are part of the report, not errors.
pub fn solve<W: Write>(problem: &Problem, out: &mut W) -> eyre::Result<Solution> {
    log::info!(
        "solving f(x) = {} from x0 = {} (tol = {:e}, max_iter = {})",
        problem.f,
        problem.x0,
        problem.tol,
        problem.max_iter
    );
    let solution = newton::find_root(
        &problem.f,
        &problem.f_prime,
        problem.x0,
        problem.tol,
        problem.max_iter,
    )?;

    writeln!(out, "\n{}", termination_message(&solution))?;
    if !solution.trace.is_empty() {
        writeln!(out, "\n{}", IterationTable::new(&solution.trace))?;
        writeln!(out, "Final root approximation: x ≈ {}", format_root(solution.x))?;
    }

    Ok(solution)
}

#[cfg(feature = "plot")]
fn show_plots<W: Write>(problem: &Problem, solution: &Solution, out: &mut W) -> eyre::Result<()> {
    if solution.trace.is_empty() {
        return Ok(());
    }
    if let Err(error) = tangent_observers::newton_plots::show(&problem.f, &problem.f_prime, solution)
    {
        log::error!("plotting failed: {error:?}");
        writeln!(out, "Error in plotting: {error}")?;
    }
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn show_plots<W: Write>(_problem: &Problem, _solution: &Solution, _out: &mut W) -> eyre::Result<()> {
    Ok(())
}
