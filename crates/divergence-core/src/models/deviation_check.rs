use serde::{Deserialize, Serialize};

/// Outcome of the early-deviation check over the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationCheck {
    pub detected: bool,
    /// Relative deviation of the window means as a fraction (0.15 = 15%).
    pub deviation_percent: f64,
    pub window_hours: f64,
    pub twin_window_mean: f64,
    pub baseline_window_mean: f64,
    pub threshold: f64,
}
