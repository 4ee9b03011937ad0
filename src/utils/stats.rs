//! Statistical utility functions shared by the analytics components.

/// Calculate the mean of a slice.
///
/// Returns NaN for an empty slice; callers guard emptiness themselves.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from `center`.
fn sum_sq_dev(values: &[f64], center: f64) -> f64 {
    values.iter().map(|x| (x - center).powi(2)).sum()
}

/// Calculate the sample variance of a slice (n-1 denominator).
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    sum_sq_dev(values, mean(values)) / (values.len() - 1) as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    sum_sq_dev(values, mean(values)) / values.len() as f64
}

/// Sample standard deviation.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Population standard deviation.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Minimum and maximum of a slice, or `None` when it is empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Replace a zero scale with 1.0 so it can be used as a divisor.
///
/// Only an exact zero is substituted; other values pass through unchanged.
pub(crate) fn nonzero_or_one(scale: f64) -> f64 {
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_variance_uses_n_minus_one() {
        // Sample variance of [1, 2, 3, 4, 5] = 10 / 4
        assert_relative_eq!(
            sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.5,
            epsilon = 1e-10
        );
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(sample_variance(&[]).is_nan());
    }

    #[test]
    fn population_variance_uses_n() {
        // Population variance of [1, 2, 3, 4, 5] = 10 / 5
        assert_relative_eq!(
            population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(population_variance(&[7.0]), 0.0, epsilon = 1e-10);
        assert!(population_variance(&[]).is_nan());
    }

    #[test]
    fn std_devs_are_square_roots() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&values), 2.0, epsilon = 1e-10);
        assert_relative_eq!(
            sample_std_dev(&values),
            (32.0_f64 / 7.0).sqrt(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn min_max_finds_extrema() {
        assert_eq!(min_max(&[3.0, -1.0, 8.0, 2.0]), Some((-1.0, 8.0)));
        assert_eq!(min_max(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn zero_scale_is_replaced() {
        assert_eq!(nonzero_or_one(0.0), 1.0);
        assert_eq!(nonzero_or_one(-0.0), 1.0);
        assert_eq!(nonzero_or_one(2.5), 2.5);
    }
}
