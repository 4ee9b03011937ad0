//! Analysis configuration.
//!
//! Mirrors the options a panel exposes: which statistic to surface, the
//! forecast model and horizon, the smoothing factor, and the anomaly and
//! band parameters. Field names serialize in camelCase, and any field may be
//! omitted from JSON to take its default. The keys `statChoice`,
//! `forecastHorizon`, `anomalyZThreshold` and `forecastBandSigma` are
//! accepted as aliases of `stat`, `forecastPoints`, `anomalyZ` and
//! `forecastSigma`.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::models::ForecastModel;
use crate::summary::StatKind;

/// Default number of projected points.
pub const DEFAULT_FORECAST_POINTS: i64 = 5;
/// Largest horizon accepted by [`AnalyticsConfig::validate`].
pub const MAX_FORECAST_POINTS: i64 = 20;
/// Default exponential smoothing factor.
pub const DEFAULT_EXP_ALPHA: f64 = 0.5;
/// Default anomaly z-score threshold.
pub const DEFAULT_ANOMALY_Z: f64 = 2.0;
/// Default band sigma multiplier.
pub const DEFAULT_FORECAST_SIGMA: f64 = 1.0;

/// Configuration for a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// Primary statistic.
    #[serde(alias = "statChoice")]
    pub stat: StatKind,
    /// Forecast model.
    pub forecast_mode: ForecastModel,
    /// Requested forecast horizon.
    #[serde(alias = "forecastHorizon")]
    pub forecast_points: i64,
    /// Smoothing factor for exponential smoothing.
    pub exp_alpha: f64,
    /// Whether anomalies are detected.
    pub show_anomalies: bool,
    /// Z-score threshold for anomalies.
    #[serde(alias = "anomalyZThreshold")]
    pub anomaly_z: f64,
    /// Whether a forecast band is estimated.
    pub show_forecast_band: bool,
    /// Band width multiplier.
    #[serde(alias = "forecastBandSigma")]
    pub forecast_sigma: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            stat: StatKind::Last,
            forecast_mode: ForecastModel::LinearTrend,
            forecast_points: DEFAULT_FORECAST_POINTS,
            exp_alpha: DEFAULT_EXP_ALPHA,
            show_anomalies: true,
            anomaly_z: DEFAULT_ANOMALY_Z,
            show_forecast_band: true,
            forecast_sigma: DEFAULT_FORECAST_SIGMA,
        }
    }
}

/// `value`, or `default` when it is zero or NaN.
///
/// Infinities pass through and are left to [`AnalyticsConfig::validate`].
fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

impl AnalyticsConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration from JSON.
    ///
    /// # Example
    /// ```
    /// use panel_insight::config::AnalyticsConfig;
    /// use panel_insight::models::ForecastModel;
    ///
    /// let config = AnalyticsConfig::from_json(r#"{"forecastMode": "expSmooth", "expAlpha": 0.2}"#).unwrap();
    /// assert_eq!(config.forecast_mode, ForecastModel::ExpSmooth);
    /// assert_eq!(config.forecast_points, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the configuration as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the forecast model.
    pub fn with_model(mut self, model: ForecastModel) -> Self {
        self.forecast_mode = model;
        self
    }

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, points: i64) -> Self {
        self.forecast_points = points;
        self
    }

    /// Set the primary statistic.
    pub fn with_stat(mut self, stat: StatKind) -> Self {
        self.stat = stat;
        self
    }

    /// Effective horizon: at least one point is always projected.
    pub fn horizon(&self) -> i64 {
        self.forecast_points.max(1)
    }

    /// Effective smoothing factor.
    pub fn alpha(&self) -> f64 {
        or_default(self.exp_alpha, DEFAULT_EXP_ALPHA)
    }

    /// Effective anomaly threshold.
    pub fn z_threshold(&self) -> f64 {
        or_default(self.anomaly_z, DEFAULT_ANOMALY_Z)
    }

    /// Effective band multiplier.
    pub fn band_sigma(&self) -> f64 {
        or_default(self.forecast_sigma, DEFAULT_FORECAST_SIGMA)
    }

    /// Check the effective parameters.
    pub fn validate(&self) -> Result<()> {
        if self.forecast_points > MAX_FORECAST_POINTS {
            return Err(AnalyticsError::InvalidParameter(format!(
                "forecast points must be at most {}, got {}",
                MAX_FORECAST_POINTS, self.forecast_points
            )));
        }

        let alpha = self.alpha();
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(AnalyticsError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {}",
                alpha
            )));
        }

        let z = self.z_threshold();
        if z <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "anomaly z-threshold must be positive, got {}",
                z
            )));
        }

        let sigma = self.band_sigma();
        if sigma <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "band sigma must be positive, got {}",
                sigma
            )));
        }

        Ok(())
    }
}
