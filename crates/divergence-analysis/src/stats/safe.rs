//! Guarded arithmetic shared by every statistic.

/// `numerator / denominator`, or 0.0 when the denominator is zero.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `(value - reference) / |reference|`, or 0.0 when the reference is zero.
#[inline]
pub fn relative_deviation(value: f64, reference: f64) -> f64 {
    safe_div(value - reference, reference.abs())
}
