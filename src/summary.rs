//! Summary statistics over a sample sequence.
//!
//! Reduces a sequence to its last value, extrema and arithmetic mean, and
//! lets the caller pick one of them as the primary statistic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::utils::stats::min_max;

/// Which scalar of a [`Summary`] is surfaced as the primary statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    /// Final sample.
    #[default]
    Last,
    /// Smallest sample.
    Min,
    /// Largest sample.
    Max,
    /// Arithmetic mean.
    Avg,
}

impl StatKind {
    /// Order in which [`StatKind::next`] cycles.
    pub const CYCLE: [StatKind; 4] = [StatKind::Last, StatKind::Avg, StatKind::Min, StatKind::Max];

    /// The statistic after this one: last, avg, min, max, then back to last.
    pub fn next(self) -> Self {
        let idx = Self::CYCLE
            .iter()
            .position(|&k| k == self)
            .unwrap_or_default();
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    /// Configuration name of the statistic.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Last => "last",
            StatKind::Min => "min",
            StatKind::Max => "max",
            StatKind::Avg => "avg",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Last => "Last",
            StatKind::Min => "Minimum",
            StatKind::Max => "Maximum",
            StatKind::Avg => "Average",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "last" => Ok(StatKind::Last),
            "min" => Ok(StatKind::Min),
            "max" => Ok(StatKind::Max),
            "avg" => Ok(StatKind::Avg),
            other => Err(AnalyticsError::UnknownVariant {
                kind: "statistic",
                value: other.to_string(),
            }),
        }
    }
}

/// Summary statistics of a non-empty sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Final element in sequence order.
    pub last: f64,
    /// Smallest element.
    pub min: f64,
    /// Largest element.
    pub max: f64,
    /// Arithmetic mean.
    pub avg: f64,
}

impl Summary {
    /// Get the statistic selected by `kind`.
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Last => self.last,
            StatKind::Min => self.min,
            StatKind::Max => self.max,
            StatKind::Avg => self.avg,
        }
    }
}

/// Summarize a sample sequence.
///
/// # Errors
/// Returns [`AnalyticsError::EmptyData`] when `values` is empty.
///
/// # Example
/// ```
/// use panel_insight::summary::{summarize, StatKind};
///
/// let summary = summarize(&[4.0, 1.0, 7.0]).unwrap();
/// assert_eq!(summary.last, 7.0);
/// assert_eq!(summary.get(StatKind::Min), 1.0);
/// assert_eq!(summary.avg, 4.0);
/// ```
pub fn summarize(values: &[f64]) -> Result<Summary> {
    let &last = values.last().ok_or(AnalyticsError::EmptyData)?;
    let (min, max) = min_max(values).ok_or(AnalyticsError::EmptyData)?;
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    Ok(Summary { last, min, max, avg })
}
