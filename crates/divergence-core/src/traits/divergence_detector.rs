use crate::models::{DivergenceResult, MetricSeries};

/// Twin-vs-baseline divergence detection.
///
/// Implementations hold only immutable configuration, so one instance may be
/// shared across threads and called concurrently.
pub trait IDivergenceDetector: Send + Sync {
    /// Compare `twin` against `baseline` and return the full result.
    fn detect(&self, twin: &MetricSeries, baseline: &MetricSeries) -> DivergenceResult;

    /// Strict escalation rule applied to a previously computed result.
    fn is_significant(&self, result: &DivergenceResult) -> bool;
}
