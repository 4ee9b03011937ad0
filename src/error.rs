//! Error types for the panel-insight library.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while summarizing or configuring an analysis.
///
/// The numeric engine itself (forecasting, anomaly detection, band
/// estimation) never fails; it falls back to defined degenerate outputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input contains no numeric samples.
    #[error("no numeric data")]
    EmptyData,

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A model or statistic name that is not recognized.
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Configuration could not be decoded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Config(err.to_string())
    }
}
