use super::Slope;

/// One Newton iteration, as recorded in the trace.
///
/// Records are created once per iteration and never modified. The `iter`
/// index is 1-based and contiguous within a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    iter: usize,
    x: f64,
    value: f64,
    derivative: f64,
    slope: f64,
    next_x: f64,
    error: f64,
    guarded: bool,
}

impl IterationRecord {
    pub(super) fn new(
        iter: usize,
        x: f64,
        value: f64,
        derivative: f64,
        slope: Slope,
        next_x: f64,
    ) -> Self {
        Self {
            iter,
            x,
            value,
            derivative,
            slope: slope.value(),
            next_x,
            error: (next_x - x).abs(),
            guarded: slope.is_guarded(),
        }
    }

    /// Returns the 1-based iteration index.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Returns the estimate `x_n` this iteration started from.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns `f(x_n)`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `f'(x_n)` as evaluated.
    #[must_use]
    pub fn derivative(&self) -> f64 {
        self.derivative
    }

    /// Returns the slope the step was taken with.
    ///
    /// Equal to [`derivative`](Self::derivative) unless the step was guarded.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the next estimate `x_{n+1}`.
    #[must_use]
    pub fn next_x(&self) -> f64 {
        self.next_x
    }

    /// Returns the step error `|x_{n+1} - x_n|`.
    #[must_use]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Returns true if the derivative guard altered the slope.
    #[must_use]
    pub fn is_guarded(&self) -> bool {
        self.guarded
    }
}
