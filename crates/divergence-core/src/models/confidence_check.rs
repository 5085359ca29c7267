use serde::{Deserialize, Serialize};

/// Outcome of the two-sample confidence-interval check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceCheck {
    /// Twin mean fell outside `[lower_bound, upper_bound]`.
    pub exceeded: bool,
    pub twin_mean: f64,
    pub baseline_mean: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Signed `(twin_mean - baseline_mean) / standard_error`; 0 when SE is 0.
    pub z_score: f64,
    pub standard_error: f64,
}
