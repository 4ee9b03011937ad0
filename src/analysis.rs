//! One-shot analysis of a sample sequence.
//!
//! Runs the summarizer and anomaly detector on the history, forecasts from
//! the same history, and bands the forecast, all according to an
//! [`AnalyticsConfig`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::band::{estimate_band, ForecastBand};
use crate::config::AnalyticsConfig;
use crate::core::{pooled_values, select_source};
use crate::detection::{detect_anomalies, Anomaly};
use crate::error::{AnalyticsError, Result};
use crate::models::{forecast, forecast_delta, ForecastModel};
use crate::summary::{summarize, StatKind, Summary};

/// Everything computed for one sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Summary of the summarized values.
    pub summary: Summary,
    /// Statistic selected as primary.
    pub stat: StatKind,
    /// Value of the primary statistic.
    pub primary: f64,
    /// Model used for the forecast.
    pub model: ForecastModel,
    /// Projected points.
    pub forecast: Vec<f64>,
    /// Last forecast point minus last history value.
    pub forecast_delta: f64,
    /// Flagged samples, in sequence order. Empty when detection is disabled.
    pub anomalies: Vec<Anomaly>,
    /// Band around the forecast, when enabled.
    pub band: Option<ForecastBand>,
    /// Sequence the forecast, anomalies and band were computed from.
    source: Vec<f64>,
    /// Configuration the analysis was run with.
    config: AnalyticsConfig,
}

impl Analysis {
    /// History the forecast was computed from.
    pub fn source(&self) -> &[f64] {
        &self.source
    }

    /// Configuration this analysis was run with.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Number of flagged samples.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    /// Check if the sample at `index` was flagged.
    pub fn is_anomaly(&self, index: usize) -> bool {
        self.anomalies.iter().any(|a| a.index == index)
    }

    /// Re-run the forecast and band with a different model.
    ///
    /// Summary and anomalies do not depend on the model and are kept.
    pub fn with_model(&self, model: ForecastModel) -> Self {
        let config = self.config.clone().with_model(model);
        let (forecast, forecast_delta, band) = project(&self.source, &config);
        Self {
            model,
            forecast,
            forecast_delta,
            band,
            config,
            ..self.clone()
        }
    }

    /// Switch the primary statistic to the next one in the cycle.
    pub fn cycle_stat(&mut self) {
        self.stat = self.stat.next();
        self.config.stat = self.stat;
        self.primary = self.summary.get(self.stat);
    }
}

/// Forecast, delta and optional band for `source`.
fn project(source: &[f64], config: &AnalyticsConfig) -> (Vec<f64>, f64, Option<ForecastBand>) {
    let points = forecast(
        source,
        config.forecast_mode,
        config.horizon(),
        config.alpha(),
    );
    let delta = forecast_delta(source, &points);
    let band = config
        .show_forecast_band
        .then(|| estimate_band(source, &points, config.band_sigma()));
    (points, delta, band)
}

fn run(summarized: &[f64], source: Vec<f64>, config: &AnalyticsConfig) -> Result<Analysis> {
    config.validate()?;
    if source.is_empty() {
        return Err(AnalyticsError::EmptyData);
    }
    let summary = summarize(summarized)?;

    debug!(
        samples = summarized.len(),
        source = source.len(),
        model = %config.forecast_mode,
        horizon = config.horizon(),
        "running analysis"
    );

    let (forecast, forecast_delta, band) = project(&source, config);
    let anomalies = if config.show_anomalies {
        detect_anomalies(&source, config.z_threshold())
    } else {
        Vec::new()
    };

    Ok(Analysis {
        summary,
        stat: config.stat,
        primary: summary.get(config.stat),
        model: config.forecast_mode,
        forecast,
        forecast_delta,
        anomalies,
        band,
        source,
        config: config.clone(),
    })
}

/// Analyze a single sequence of finite values.
///
/// # Errors
/// [`AnalyticsError::EmptyData`] when `values` is empty, or the
/// [`AnalyticsConfig::validate`] error for an invalid configuration.
///
/// # Example
/// ```
/// use panel_insight::analysis::analyze;
/// use panel_insight::config::AnalyticsConfig;
///
/// let analysis = analyze(&[1.0, 2.0, 3.0, 4.0, 5.0], &AnalyticsConfig::default()).unwrap();
/// assert_eq!(analysis.primary, 5.0);
/// assert_eq!(analysis.forecast.len(), 5);
/// assert!((analysis.forecast_delta - 5.0).abs() < 1e-9);
/// ```
pub fn analyze(values: &[f64], config: &AnalyticsConfig) -> Result<Analysis> {
    run(values, values.to_vec(), config)
}

/// Analyze raw numeric fields.
///
/// Non-finite values are dropped. The summary covers the finite values of
/// every field; the forecast, anomalies and band use the first field with
/// any finite value.
pub fn analyze_fields<F: AsRef<[f64]>>(fields: &[F], config: &AnalyticsConfig) -> Result<Analysis> {
    let pooled = pooled_values(fields);
    let source = select_source(fields, &pooled);
    run(&pooled, source, config)
}
