//! Helpers for turning raw field values into a sample sequence.
//!
//! The engine assumes every sample it receives is finite. These helpers are
//! for callers that still hold raw data (possibly containing NaN or
//! infinities) split across several numeric fields.

/// Keep only the finite values of `raw`, preserving order.
pub fn finite_values(raw: &[f64]) -> Vec<f64> {
    raw.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Finite values of every field, concatenated in field order.
pub fn pooled_values<F: AsRef<[f64]>>(fields: &[F]) -> Vec<f64> {
    fields
        .iter()
        .flat_map(|field| field.as_ref().iter().copied())
        .filter(|v| v.is_finite())
        .collect()
}

/// The sequence used for forecasting and anomaly detection.
///
/// This is the finite values of the first field that has any, or `pooled`
/// when no single field does.
pub fn select_source<F: AsRef<[f64]>>(fields: &[F], pooled: &[f64]) -> Vec<f64> {
    fields
        .iter()
        .map(|field| finite_values(field.as_ref()))
        .find(|values| !values.is_empty())
        .unwrap_or_else(|| pooled.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_drops_nan_and_infinities() {
        let raw = [1.0, f64::NAN, 2.0, f64::INFINITY, f64::NEG_INFINITY, 3.0];
        assert_eq!(finite_values(&raw), vec![1.0, 2.0, 3.0]);
        assert!(finite_values(&[]).is_empty());
    }

    #[test]
    fn pooled_values_concatenates_fields_in_order() {
        let fields = vec![vec![1.0, f64::NAN], vec![], vec![5.0, 6.0]];
        assert_eq!(pooled_values(&fields), vec![1.0, 5.0, 6.0]);
    }

    #[test]
    fn select_source_prefers_first_non_empty_field() {
        let fields = vec![vec![f64::NAN], vec![4.0, 5.0], vec![9.0]];
        let pooled = pooled_values(&fields);
        assert_eq!(select_source(&fields, &pooled), vec![4.0, 5.0]);
    }

    #[test]
    fn select_source_falls_back_to_pooled() {
        let fields: Vec<Vec<f64>> = vec![vec![f64::NAN], vec![]];
        let pooled = vec![1.0, 2.0];
        assert_eq!(select_source(&fields, &pooled), vec![1.0, 2.0]);
    }
}
