//! Exponential smoothing projection.
//!
//! The level starts at the first history value and is updated with
//! `level = α·v + (1−α)·level` for every history value, the first included.
//! Each forecast step then applies `level = α·level + (1−α)·level`, so the
//! projection stays flat at the smoothed level.

/// Smoothed level after running the recurrence over `history`.
///
/// Returns `None` for an empty history.
pub fn smoothed_level(history: &[f64], alpha: f64) -> Option<f64> {
    let &first = history.first()?;
    Some(
        history
            .iter()
            .fold(first, |level, &v| alpha * v + (1.0 - alpha) * level),
    )
}

/// Project `horizon` points by exponential smoothing with factor `alpha`.
pub fn project(history: &[f64], horizon: usize, alpha: f64) -> Vec<f64> {
    let Some(mut level) = smoothed_level(history, alpha) else {
        return Vec::new();
    };

    let mut forecast = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        level = alpha * level + (1.0 - alpha) * level;
        forecast.push(level);
    }
    forecast
}
