//! Z-score anomaly detection.
//!
//! Scores each value against the sample mean and sample standard deviation
//! (n−1 denominator) and flags values whose score magnitude reaches a
//! threshold.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::utils::stats::{mean, nonzero_or_one, sample_std_dev};

/// A flagged sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Position in the input sequence.
    pub index: usize,
    /// The sample value.
    pub value: f64,
    /// Signed standard score.
    pub z: f64,
}

/// Standard scores of every value.
///
/// Sequences shorter than two values have no defined sample deviation and
/// score 0.0 everywhere. A zero deviation is replaced by 1, so the scores
/// become raw deviations from the mean.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return vec![0.0; values.len()];
    }

    let m = mean(values);
    let std = sample_std_dev(values);
    if std == 0.0 {
        trace!(n = values.len(), "zero sample deviation, scoring raw deviations");
    }
    let std = nonzero_or_one(std);

    values.iter().map(|v| (v - m) / std).collect()
}

/// Detect values whose standard score magnitude is at least `z_threshold`.
///
/// The comparison is inclusive. Results follow the input order. Fewer than
/// two values never produce anomalies.
///
/// # Example
/// ```
/// use panel_insight::detection::detect_anomalies;
///
/// let values = [10.0, 11.0, 9.0, 10.0, 10.0, 11.0, 9.0, 10.0, 45.0];
/// let anomalies = detect_anomalies(&values, 2.0);
/// assert_eq!(anomalies.len(), 1);
/// assert_eq!(anomalies[0].index, 8);
/// ```
pub fn detect_anomalies(values: &[f64], z_threshold: f64) -> Vec<Anomaly> {
    if values.len() < 2 {
        return Vec::new();
    }

    values
        .iter()
        .zip(z_scores(values))
        .enumerate()
        .filter(|(_, (_, z))| z.abs() >= z_threshold)
        .map(|(index, (&value, z))| Anomaly { index, value, z })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn short_sequences_have_no_anomalies() {
        assert!(detect_anomalies(&[], 1.0).is_empty());
        assert!(detect_anomalies(&[100.0], 0.0).is_empty());
    }

    #[test]
    fn constant_sequence_is_never_flagged() {
        assert!(detect_anomalies(&[10.0, 10.0, 10.0, 10.0], 1.0).is_empty());
    }

    #[test]
    fn spike_is_detected() {
        let mut values = vec![5.0; 20];
        values[12] = 50.0;
        let anomalies = detect_anomalies(&values, 3.0);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].index, 12);
        assert_eq!(anomalies[0].value, 50.0);
        assert!(anomalies[0].z > 3.0);
    }

    #[test]
    fn negative_deviations_are_flagged_with_negative_z() {
        let mut values = vec![5.0; 20];
        values[3] = -40.0;
        let anomalies = detect_anomalies(&values, 3.0);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].index, 3);
        assert!(anomalies[0].z < -3.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        // [0, 2]: mean 1, sample std sqrt(2), |z| = 1/sqrt(2) for both.
        let z = 1.0 / 2.0_f64.sqrt();
        let scores = z_scores(&[0.0, 2.0]);
        assert_relative_eq!(scores[0], -z, epsilon = 1e-12);
        assert_relative_eq!(scores[1], z, epsilon = 1e-12);

        let threshold = scores[1].abs();
        assert_eq!(detect_anomalies(&[0.0, 2.0], threshold).len(), 2);
    }

    #[test]
    fn results_follow_input_order() {
        let mut values = vec![0.0; 30];
        values[25] = 10.0;
        values[4] = -12.0;
        let anomalies = detect_anomalies(&values, 2.5);
        let indices: Vec<usize> = anomalies.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![4, 25]);
    }

    #[test]
    fn uses_sample_standard_deviation() {
        // mean 2.5, sample std sqrt(5/3)
        let scores = z_scores(&[1.0, 2.0, 3.0, 4.0]);
        let std = (5.0_f64 / 3.0).sqrt();
        assert_relative_eq!(scores[0], -1.5 / std, epsilon = 1e-12);
        assert_relative_eq!(scores[3], 1.5 / std, epsilon = 1e-12);
    }
}
