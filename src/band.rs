//! Uncertainty band around a forecast.
//!
//! The band is symmetric and uniform across the horizon: every forecast
//! point is offset by `sigma` times the population standard deviation of the
//! history and forecast taken together.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::utils::stats::{nonzero_or_one, population_std_dev};

/// Upper and lower bounds paired index-for-index with a forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastBand {
    /// Forecast plus `sigma * std`.
    pub upper: Vec<f64>,
    /// Forecast minus `sigma * std`.
    pub lower: Vec<f64>,
    /// Standard deviation used for the offset (zero replaced by 1).
    pub std: f64,
    /// Multiplier applied to `std`.
    pub sigma: f64,
}

impl ForecastBand {
    /// An empty band.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of banded steps.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    /// Check if the band has no steps.
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Distance between upper and lower bound, identical for every step.
    pub fn width(&self) -> f64 {
        2.0 * self.sigma * self.std
    }
}

/// Estimate the band around `forecast` given the `source` history.
///
/// Returns an empty band when either sequence is empty.
///
/// # Example
/// ```
/// use panel_insight::band::estimate_band;
///
/// let band = estimate_band(&[1.0, 3.0], &[2.0], 2.0);
/// // Population std of [1, 3, 2] is sqrt(2/3).
/// let offset = 2.0 * (2.0_f64 / 3.0).sqrt();
/// assert!((band.upper[0] - (2.0 + offset)).abs() < 1e-12);
/// assert!((band.lower[0] - (2.0 - offset)).abs() < 1e-12);
/// ```
pub fn estimate_band(source: &[f64], forecast: &[f64], sigma: f64) -> ForecastBand {
    if source.is_empty() || forecast.is_empty() {
        return ForecastBand::new();
    }

    let mut combined = Vec::with_capacity(source.len() + forecast.len());
    combined.extend_from_slice(source);
    combined.extend_from_slice(forecast);

    let std = population_std_dev(&combined);
    if std == 0.0 {
        trace!(n = combined.len(), "zero band deviation, using 1");
    }
    let std = nonzero_or_one(std);
    let offset = sigma * std;

    ForecastBand {
        upper: forecast.iter().map(|v| v + offset).collect(),
        lower: forecast.iter().map(|v| v - offset).collect(),
        std,
        sigma,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_inputs_give_empty_band() {
        assert!(estimate_band(&[1.0, 2.0], &[], 1.0).is_empty());
        assert!(estimate_band(&[], &[1.0, 2.0], 1.0).is_empty());
    }

    #[test]
    fn uses_population_deviation_of_combined_sequence() {
        // [2, 4, 4, 4] + [5, 5, 7, 9]: population std = 2
        let band = estimate_band(&[2.0, 4.0, 4.0, 4.0], &[5.0, 5.0, 7.0, 9.0], 1.5);
        assert_relative_eq!(band.std, 2.0, epsilon = 1e-12);
        assert_relative_eq!(band.upper[0], 8.0, epsilon = 1e-12);
        assert_relative_eq!(band.lower[3], 6.0, epsilon = 1e-12);
        assert_eq!(band.len(), 4);
    }

    #[test]
    fn width_is_uniform_across_horizon() {
        let band = estimate_band(&[1.0, 5.0, 2.0, 8.0], &[3.0, 4.0, 9.0], 2.0);
        for (u, l) in band.upper.iter().zip(&band.lower) {
            assert_relative_eq!(u - l, band.width(), epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_deviation_falls_back_to_unit_width() {
        let band = estimate_band(&[3.0, 3.0], &[3.0, 3.0], 1.0);
        assert_eq!(band.std, 1.0);
        assert_eq!(band.upper, vec![4.0, 4.0]);
        assert_eq!(band.lower, vec![2.0, 2.0]);
    }
}
