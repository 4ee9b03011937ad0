//! Least-squares linear trend projection.

use tracing::trace;

/// Intercept and slope of a fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    /// Value at index 0.
    pub intercept: f64,
    /// Change per index step.
    pub slope: f64,
}

impl TrendLine {
    /// Evaluate the line at position `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit an ordinary least-squares line over `history`, using the 0-based
/// index as the independent variable.
///
/// Uses the closed-form sums Σx, Σx², Σy and Σxy. When the denominator
/// `n·Σx² − (Σx)²` is zero (a single point) it is replaced by 1, which
/// yields a zero slope. Returns `None` for an empty history.
pub fn fit(history: &[f64]) -> Option<TrendLine> {
    if history.is_empty() {
        return None;
    }

    let n = history.len() as f64;
    let sum_x = n * (n - 1.0) / 2.0;
    let sum_x2 = (n - 1.0) * n * (2.0 * n - 1.0) / 6.0;
    let sum_y: f64 = history.iter().sum();
    let sum_xy: f64 = history
        .iter()
        .enumerate()
        .map(|(i, &y)| i as f64 * y)
        .sum();

    let mut denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        trace!(n = history.len(), "degenerate trend denominator, using 1");
        denominator = 1.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(TrendLine { intercept, slope })
}

/// Project `horizon` points along the trend fitted to `history`.
///
/// Step `i` is the line evaluated at `n + i`. Projected points never feed
/// back into the fit.
pub fn project(history: &[f64], horizon: usize) -> Vec<f64> {
    let Some(line) = fit(history) else {
        return Vec::new();
    };

    let n = history.len();
    (0..horizon).map(|i| line.at((n + i) as f64)).collect()
}
