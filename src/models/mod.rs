//! Forecasting models.
//!
//! Three fixed projection strategies, selected with [`ForecastModel`]:
//! - `movingAverage`: trailing mean of up to five values, fed back into the window
//! - `linearTrend`: least-squares line over the history index
//! - `expSmooth`: exponentially smoothed level, projected flat

pub mod exp_smooth;
pub mod linear_trend;
pub mod moving_average;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Selects the projection algorithm used by [`forecast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForecastModel {
    /// Trailing moving average with feedback.
    MovingAverage,
    /// Ordinary least-squares trend line.
    #[default]
    LinearTrend,
    /// Simple exponential smoothing.
    ExpSmooth,
}

impl ForecastModel {
    /// All models, in model-switcher order.
    pub const ALL: [ForecastModel; 3] = [
        ForecastModel::LinearTrend,
        ForecastModel::MovingAverage,
        ForecastModel::ExpSmooth,
    ];

    /// Configuration name of the model.
    pub fn as_str(self) -> &'static str {
        match self {
            ForecastModel::MovingAverage => "movingAverage",
            ForecastModel::LinearTrend => "linearTrend",
            ForecastModel::ExpSmooth => "expSmooth",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ForecastModel::MovingAverage => "Moving average",
            ForecastModel::LinearTrend => "Linear trend",
            ForecastModel::ExpSmooth => "Exponential smoothing",
        }
    }

    /// Whether the model reads the smoothing factor.
    pub fn uses_alpha(self) -> bool {
        matches!(self, ForecastModel::ExpSmooth)
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastModel {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "movingAverage" => Ok(ForecastModel::MovingAverage),
            "linearTrend" => Ok(ForecastModel::LinearTrend),
            "expSmooth" => Ok(ForecastModel::ExpSmooth),
            other => Err(AnalyticsError::UnknownVariant {
                kind: "forecast model",
                value: other.to_string(),
            }),
        }
    }
}

/// Project `horizon` future points from `history` with the selected model.
///
/// Returns an empty vector when `history` is empty or `horizon <= 0`.
/// `alpha` is only read by [`ForecastModel::ExpSmooth`].
///
/// # Example
/// ```
/// use panel_insight::models::{forecast, ForecastModel};
///
/// let points = forecast(&[5.0], ForecastModel::LinearTrend, 3, 0.5);
/// assert_eq!(points, vec![5.0, 5.0, 5.0]);
///
/// assert!(forecast(&[1.0, 2.0], ForecastModel::MovingAverage, -3, 0.5).is_empty());
/// ```
pub fn forecast(history: &[f64], model: ForecastModel, horizon: i64, alpha: f64) -> Vec<f64> {
    let horizon = match usize::try_from(horizon) {
        Ok(h) if h > 0 && !history.is_empty() => h,
        _ => return Vec::new(),
    };

    match model {
        ForecastModel::MovingAverage => moving_average::project(history, horizon),
        ForecastModel::LinearTrend => linear_trend::project(history, horizon),
        ForecastModel::ExpSmooth => exp_smooth::project(history, horizon, alpha),
    }
}

/// Difference between the last forecast point and the last history value.
///
/// Returns 0.0 when either sequence is empty.
pub fn forecast_delta(history: &[f64], forecast: &[f64]) -> f64 {
    match (history.last(), forecast.last()) {
        (Some(&last_seen), Some(&last_forecast)) => last_forecast - last_seen,
        _ => 0.0,
    }
}
