//! Aggregate detection result handed back to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfidenceCheck, DeviationCheck, DriftMetrics, MetricComparison};

/// Everything one `detect` call computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivergenceResult {
    /// Loose "something moved" flag.
    pub detected: bool,
    pub confidence_interval_exceeded: bool,
    pub early_deviation_detected: bool,
    pub drift_score: f64,
    pub confidence_check: ConfidenceCheck,
    pub deviation_check: DeviationCheck,
    pub drift_metrics: DriftMetrics,
    pub metrics_comparison: Vec<MetricComparison>,
    pub timestamp: DateTime<Utc>,
}

/// Ordered label combining the loose and strict decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceSeverity {
    None,
    Detected,
    Significant,
}
