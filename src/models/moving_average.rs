//! Moving average projection.
//!
//! Each forecast point is the mean of a trailing window. Forecast points are
//! appended to the working series, so once the window moves past the end of
//! the history later points are averages of earlier forecasts.

/// Maximum number of trailing values averaged per step.
pub const WINDOW: usize = 5;

/// Project `horizon` points with a trailing moving average.
///
/// The window is `min(WINDOW, history.len())`, fixed for the whole call.
/// Returns an empty vector when `history` is empty.
///
/// # Example
/// ```
/// use panel_insight::models::moving_average;
///
/// let forecast = moving_average::project(&[1.0, 2.0, 3.0, 4.0, 5.0], 1);
/// assert_eq!(forecast, vec![3.0]);
/// ```
pub fn project(history: &[f64], horizon: usize) -> Vec<f64> {
    if history.is_empty() || horizon == 0 {
        return Vec::new();
    }

    let window = WINDOW.min(history.len());
    let mut working = Vec::with_capacity(history.len() + horizon);
    working.extend_from_slice(history);

    let mut forecast = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        let tail = &working[working.len() - window..];
        let mean = tail.iter().sum::<f64>() / window as f64;
        forecast.push(mean);
        working.push(mean);
    }

    forecast
}
