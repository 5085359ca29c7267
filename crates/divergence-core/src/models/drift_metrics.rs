//! Drift metrics: pointwise deviation statistics between twin and baseline.

use serde::{Deserialize, Serialize};

/// Direction of the least-squares slope of pointwise deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(s)
    }
}

/// Multi-signal drift statistics over index-aligned points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DriftMetrics {
    /// Composite score in [0.0, 1.0].
    pub drift_score: f64,
    pub mean_absolute_deviation: f64,
    pub root_mean_square_deviation: f64,
    pub max_deviation: f64,
    pub correlation_coefficient: f64,
    pub trend_direction: TrendDirection,
}

impl DriftMetrics {
    /// All-zero metrics with a stable trend, returned for empty input.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
