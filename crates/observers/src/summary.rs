//! Human-readable summaries of a Newton run.

use tangent_solvers::equation::newton::{Solution, Status};

/// Formats a root estimate with 8 decimals, dropping trailing zeros.
///
/// ```
/// use tangent_observers::format_root;
///
/// assert_eq!(format_root(2.0), "2");
/// assert_eq!(format_root(1.41421356237), "1.41421356");
/// assert_eq!(format_root(-0.25), "-0.25");
/// ```
#[must_use]
pub fn format_root(x: f64) -> String {
    format_trimmed(x, 8)
}

/// Formats `x` with `decimals` places, dropping trailing zeros and a
/// trailing decimal point.
#[must_use]
pub fn format_trimmed(x: f64, decimals: usize) -> String {
    let text = format!("{x:.decimals$}");
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        &text
    };
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Returns the sentence describing how a run terminated.
///
/// The estimate is printed with 8 fixed decimals.
#[must_use]
pub fn termination_message(solution: &Solution) -> String {
    let x = solution.x;
    match solution.status {
        Status::Converged => {
            format!("Converged to {x:.8} after {} iterations.", solution.iters)
        }
        Status::MaxIters => format!("Maximum iterations reached. Best approximation: {x:.8}"),
        Status::StoppedByObserver => format!(
            "Stopped after {} iterations. Best approximation: {x:.8}",
            solution.iters
        ),
        Status::EvaluationFailed => match &solution.failure {
            Some(failure) => format!(
                "Error in iteration {}: {} evaluation failed: {}. Best approximation: {x:.8}",
                failure.iter, failure.target, failure.source
            ),
            None => format!("Evaluation failed. Best approximation: {x:.8}"),
        },
    }
}
