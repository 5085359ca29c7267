//! Inference helpers for the two-sample confidence-interval check.

use divergence_core::constants::{Z_FALLBACK, Z_TABLE};

use super::safe::safe_div;

/// `(value - mean) / std_dev`, or 0.0 when `std_dev` is zero.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    safe_div(value - mean, std_dev)
}

/// Standard error of the difference of two sample means:
/// `sqrt(sd1²/n1 + sd2²/n2)`. Returns 0.0 if either sample is empty.
pub fn standard_error(std_dev1: f64, n1: usize, std_dev2: f64, n2: usize) -> f64 {
    if n1 == 0 || n2 == 0 {
        return 0.0;
    }
    (std_dev1.powi(2) / n1 as f64 + std_dev2.powi(2) / n2 as f64).sqrt()
}

/// Critical z-value for a two-sided confidence level.
///
/// Discrete lookup over five levels (0.99, 0.95, 0.90, 0.85, 0.80), picking the
/// highest level not above `confidence`; anything below 0.80 falls back to 1.96.
/// This approximates the inverse normal CDF and could be replaced by a
/// continuous computation if other confidence levels need exact values.
pub fn z_value_for_confidence(confidence: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|(level, _)| confidence >= *level)
        .map(|(_, z)| *z)
        .unwrap_or(Z_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_table_boundaries() {
        assert_eq!(z_value_for_confidence(0.99), 2.576);
        assert_eq!(z_value_for_confidence(0.95), 1.96);
        assert_eq!(z_value_for_confidence(0.90), 1.645);
        assert_eq!(z_value_for_confidence(0.85), 1.44);
        assert_eq!(z_value_for_confidence(0.80), 1.28);
        assert_eq!(z_value_for_confidence(0.5), 1.96);
    }

    #[test]
    fn z_table_between_levels_rounds_down() {
        assert_eq!(z_value_for_confidence(0.995), 2.576);
        assert_eq!(z_value_for_confidence(0.97), 1.96);
        assert_eq!(z_value_for_confidence(0.82), 1.28);
        assert_eq!(z_value_for_confidence(0.79), 1.96);
    }

    #[test]
    fn z_score_guards_zero_std_dev() {
        assert_eq!(z_score(10.0, 5.0, 0.0), 0.0);
        assert_eq!(z_score(10.0, 5.0, 2.5), 2.0);
    }

    #[test]
    fn standard_error_guards_empty_samples() {
        assert_eq!(standard_error(1.0, 0, 1.0, 10), 0.0);
        assert_eq!(standard_error(1.0, 10, 1.0, 0), 0.0);
    }

    #[test]
    fn standard_error_combines_variances() {
        // sqrt(4/4 + 9/9) = sqrt(2)
        let se = standard_error(2.0, 4, 3.0, 9);
        assert!((se - 2f64.sqrt()).abs() < 1e-12);
    }
}
