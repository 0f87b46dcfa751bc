//! Plain-text table of a Newton iteration trace.

use std::fmt;

use tangent_solvers::equation::newton::IterationRecord;

const HEADERS: [&str; 6] = ["Iteration", "x_n", "f(x_n)", "f'(x_n)", "x_(n+1)", "Error"];

/// Renders an iteration trace as an aligned text table.
///
/// One row per record, floats with a fixed number of decimals (6 by default).
/// The `f'(x_n)` column shows the slope the step was actually taken with;
/// rows where the derivative guard replaced a near-zero derivative are
/// marked with `*` and explained in a footnote.
///
/// ```
/// use tangent_observers::IterationTable;
/// use tangent_solvers::equation::newton;
///
/// let f = |x: f64| x * x - 4.0;
/// let df = |x: f64| 2.0 * x;
/// let solution = newton::find_root(&f, &df, 3.0, 1e-6, 50).unwrap();
///
/// let table = IterationTable::new(&solution.trace).to_string();
/// assert!(table.starts_with("  Iteration"));
/// assert_eq!(table.lines().count(), 2 + solution.iters);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IterationTable<'a> {
    trace: &'a [IterationRecord],
    precision: usize,
}

impl<'a> IterationTable<'a> {
    /// Creates a table over `trace` with 6 decimals.
    #[must_use]
    pub fn new(trace: &'a [IterationRecord]) -> Self {
        Self { trace, precision: 6 }
    }

    /// Sets the number of decimals used for floating-point columns.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn rows(&self) -> Vec<[String; 6]> {
        let p = self.precision;
        self.trace
            .iter()
            .map(|r| {
                let marker = if r.is_guarded() { "*" } else { "" };
                [
                    r.iter().to_string(),
                    format!("{:.p$}", r.x()),
                    format!("{:.p$}", r.value()),
                    format!("{:.p$}{marker}", r.slope()),
                    format!("{:.p$}", r.next_x()),
                    format!("{:.p$}", r.error()),
                ]
            })
            .collect()
    }
}

impl fmt::Display for IterationTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:>w$}"))
            .collect();
        writeln!(f, "  {}", header.join("  "))?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "  {}", rule.join("  "))?;

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(c, w)| format!("{c:>w$}"))
                .collect();
            writeln!(f, "  {}", cells.join("  "))?;
        }

        if let Some(first) = self.trace.iter().find(|r| r.is_guarded()) {
            writeln!(
                f,
                "\n* derivative was near zero (f'(x_n) = {:e} at iteration {}); \
                 the step used a perturbed slope",
                first.derivative(),
                first.iter()
            )?;
        }

        Ok(())
    }
}
