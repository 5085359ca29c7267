/// Arithmetic mean; 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N).
///
/// `mean_override` skips recomputing the mean when the caller already has it.
/// Returns 0.0 for empty input.
pub fn std_dev(values: &[f64], mean_override: Option<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean_override.unwrap_or_else(|| mean(values));
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// `max - min`; 0.0 for empty input.
pub fn range(values: &[f64]) -> f64 {
    match (min(values), max(values)) {
        (Some(lo), Some(hi)) => hi - lo,
        _ => 0.0,
    }
}
