//! Ready-made plots of a finished Newton run.
//!
//! - [`function_with_iterations`] — `f` over the explored interval, the
//!   tangent steps, and the root
//! - [`derivative`] — `f'` over the same interval with the root position
//! - [`convergence`] — step error per iteration, meant for a log scale
//!
//! [`show`] puts all three in one window.

use tangent_core::Function;
use tangent_solvers::equation::newton::Solution;

use crate::{
    Panel, PlotObserver, ShowConfig, Style, show_panels, summary::format_trimmed,
};

/// Number of points used to sample a curve.
pub const SAMPLES: usize = 400;

/// Returns the x-interval worth plotting: every iterate and the final
/// estimate, widened by 1 on each side.
///
/// Returns `None` if none of those values is finite.
#[must_use]
pub fn plot_range(solution: &Solution) -> Option<(f64, f64)> {
    let xs = solution
        .trace
        .iter()
        .map(|r| r.x())
        .chain(std::iter::once(solution.x))
        .filter(|x| x.is_finite());

    let (lo, hi) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    });
    (lo <= hi).then_some((lo - 1.0, hi + 1.0))
}

/// Evaluates `f` at [`SAMPLES`] evenly spaced points of `[lo, hi]`.
///
/// Points where evaluation fails or the value is not finite are skipped.
pub fn sample<F: Function>(f: &F, lo: f64, hi: f64) -> Vec<[f64; 2]> {
    #[allow(clippy::cast_precision_loss)]
    let step = (hi - lo) / (SAMPLES - 1) as f64;
    (0..SAMPLES)
        .filter_map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = lo + step * i as f64;
            let y = f.call(x).ok().filter(|y| y.is_finite())?;
            Some([x, y])
        })
        .collect()
}

fn root_label(solution: &Solution) -> String {
    format!("x ≈ {}", format_trimmed(solution.x, 6))
}

/// Plots `f`, the Newton steps, and the root.
///
/// Trace 0 is the sampled curve. Trace 1 follows each tangent from
/// `(x_n, f(x_n))` down to `(x_{n+1}, 0)`. Trace 2 marks the final estimate.
pub fn function_with_iterations<F: Function>(f: &F, solution: &Solution) -> PlotObserver<3> {
    let root_name = format!("Root ({})", root_label(solution));
    let mut obs = PlotObserver::new(["f(x)", "Newton steps", root_name.as_str()])
        .with_style(1, Style::LinePoints)
        .with_style(2, Style::Points);

    if let Some((lo, hi)) = plot_range(solution) {
        for [x, y] in sample(f, lo, hi) {
            obs.record(x, [Some(y), None, None]);
        }
    }

    for r in &solution.trace {
        obs.record(r.x(), [None, Some(r.value()), None]);
        obs.record(r.next_x(), [None, Some(0.0), None]);
    }

    if let Ok(y) = f.call(solution.x) {
        obs.record(solution.x, [None, None, Some(y)]);
    }

    obs
}

/// Plots `f'` over the same interval as [`function_with_iterations`], with
/// a vertical line at the root.
pub fn derivative<D: Function>(f_prime: &D, solution: &Solution) -> PlotObserver<2> {
    let root_name = format!("Root position ({})", root_label(solution));
    let mut obs = PlotObserver::new(["f'(x)", root_name.as_str()]);

    let Some((lo, hi)) = plot_range(solution) else {
        return obs;
    };

    let points = sample(f_prime, lo, hi);
    for &[x, y] in &points {
        obs.record(x, [Some(y), None]);
    }

    let (y_lo, y_hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[1]), hi.max(p[1]))
        });
    if y_lo <= y_hi {
        obs.record(solution.x, [None, Some(y_lo)]);
        obs.record(solution.x, [None, Some(y_hi)]);
    }

    obs
}

/// Plots the step error against the iteration number.
pub fn convergence(solution: &Solution) -> PlotObserver<1> {
    let mut obs = PlotObserver::new(["Error"]).with_style(0, Style::LinePoints);
    for r in &solution.trace {
        #[allow(clippy::cast_precision_loss)]
        let iter = r.iter() as f64;
        obs.record(iter, [Some(r.error())]);
    }
    obs
}

/// Builds the three standard panels for a finished run.
pub fn panels<F, D>(f: &F, f_prime: &D, solution: &Solution) -> Vec<Panel>
where
    F: Function,
    D: Function,
{
    vec![
        function_with_iterations(f, solution).into_panel(
            ShowConfig::new()
                .title("Newton-Raphson Method: Function and Iterations")
                .axes("x", "f(x)")
                .legend(),
        ),
        derivative(f_prime, solution).into_panel(
            ShowConfig::new()
                .title("Derivative of the Function")
                .axes("x", "f'(x)")
                .legend(),
        ),
        convergence(solution).into_panel(
            ShowConfig::new()
                .title(format!(
                    "Convergence of Newton-Raphson Method (Root: {})",
                    root_label(solution)
                ))
                .axes("Iteration", "Error")
                .log_y(),
        ),
    ]
}

/// Opens one blocking window with all three plots of a run.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show<F, D>(f: &F, f_prime: &D, solution: &Solution) -> Result<(), eframe::Error>
where
    F: Function,
    D: Function,
{
    show_panels("Newton-Raphson Method", panels(f, f_prime, solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tangent_expr::Expr;
    use tangent_solvers::equation::newton;

    fn run(input: &str, x0: f64) -> (Expr, Expr, Solution) {
        let f = Expr::parse(input).unwrap();
        let df = f.derivative();
        let solution = newton::find_root(&f, &df, x0, 1e-10, 50).unwrap();
        (f, df, solution)
    }

    #[test]
    fn range_covers_iterates_with_margin() {
        let (_, _, solution) = run("x^2 - 4", 3.0);
        let (lo, hi) = plot_range(&solution).unwrap();

        assert_relative_eq!(lo, solution.x - 1.0);
        assert_relative_eq!(hi, 4.0);
    }

    #[test]
    fn function_plot_has_curve_steps_and_root() {
        let (f, _, solution) = run("x^2 - 4", 3.0);
        let obs = function_with_iterations(&f, &solution);

        assert_eq!(obs.points(0).len(), SAMPLES);
        assert_eq!(obs.points(1).len(), 2 * solution.iters);
        assert_eq!(obs.points(1)[0], [3.0, 5.0]);
        assert_eq!(obs.points(1)[1][1], 0.0);
        assert_eq!(obs.points(2).len(), 1);
        assert_relative_eq!(obs.points(2)[0][0], 2.0, epsilon = 1e-10);
        assert_eq!(obs.names()[2], "Root (x ≈ 2)");
    }

    #[test]
    fn sampling_skips_undefined_points() {
        let f = Expr::parse("ln(x)").unwrap();
        let points = sample(&f, -1.0, 1.0);

        assert!(!points.is_empty());
        assert!(points.len() < SAMPLES);
        assert!(points.iter().all(|p| p[0] > 0.0));
    }

    #[test]
    fn derivative_plot_marks_root_position() {
        let (_, df, solution) = run("x^2 - 4", 3.0);
        let obs = derivative(&df, &solution);

        assert_eq!(obs.points(0).len(), SAMPLES);
        let marker = obs.points(1);
        assert_eq!(marker.len(), 2);
        assert_eq!(marker[0][0], solution.x);
        assert!(marker[0][1] < marker[1][1]);
    }

    #[test]
    fn convergence_plot_has_one_point_per_iteration() {
        let (_, _, solution) = run("x^3 - 2*x - 5", 2.0);
        let obs = convergence(&solution);

        let points = obs.points(0);
        assert_eq!(points.len(), solution.iters);
        assert_eq!(points[0][0], 1.0);
        assert_eq!(points.last().unwrap()[1], solution.last().unwrap().error());
    }

    #[test]
    fn three_panels() {
        let (f, df, solution) = run("cos(x) - x", 1.0);
        assert_eq!(panels(&f, &df, &solution).len(), 3);
    }
}
