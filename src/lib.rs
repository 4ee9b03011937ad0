//! # panel-insight
//!
//! Lightweight time series analytics for dashboard panels.
//!
//! Given one ordered sequence of finite samples, the crate computes summary
//! statistics, a short-horizon forecast with one of three fixed models,
//! z-score anomalies and a symmetric uncertainty band around the forecast.
//! Every component is a pure function over slices; [`analysis::analyze`]
//! composes them according to an [`config::AnalyticsConfig`].

pub mod analysis;
pub mod band;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod summary;
pub mod utils;

pub use error::{AnalyticsError, Result};

pub mod prelude {
    pub use crate::analysis::{analyze, analyze_fields, Analysis};
    pub use crate::band::{estimate_band, ForecastBand};
    pub use crate::config::AnalyticsConfig;
    pub use crate::detection::{detect_anomalies, Anomaly};
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::models::{forecast, forecast_delta, ForecastModel};
    pub use crate::summary::{summarize, StatKind, Summary};
}
