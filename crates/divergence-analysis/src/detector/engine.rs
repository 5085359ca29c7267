use chrono::{DateTime, Utc};
use tracing::{debug, info};

use divergence_core::config::DivergenceConfig;
use divergence_core::models::{
    ComparisonRequest, ConfidenceCheck, DeviationCheck, DivergenceResult, DivergenceSeverity,
    DriftMetrics, MetricComparison, MetricSeries,
};
use divergence_core::traits::IDivergenceDetector;

use super::{comparison, confidence, decision, drift, early_deviation};
use crate::window::extract_values;

/// Divergence detector bound to one immutable configuration.
///
/// Holds no per-call state; `detect` may be called any number of times, from
/// any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector {
    config: DivergenceConfig,
}

impl Detector {
    pub fn new(config: DivergenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DivergenceConfig {
        &self.config
    }

    /// Run every check and stamp the result with the current time.
    pub fn detect(&self, twin: &MetricSeries, baseline: &MetricSeries) -> DivergenceResult {
        self.detect_at(twin, baseline, Utc::now())
    }

    /// Run every check and stamp the result with `at`.
    ///
    /// Deterministic: identical inputs produce identical results.
    pub fn detect_at(
        &self,
        twin: &MetricSeries,
        baseline: &MetricSeries,
        at: DateTime<Utc>,
    ) -> DivergenceResult {
        let twin_values = extract_values(twin);
        let baseline_values = extract_values(baseline);

        let min_samples = self.config.min_sample_size;
        if twin_values.len() < min_samples || baseline_values.len() < min_samples {
            debug!(
                twin_len = twin_values.len(),
                baseline_len = baseline_values.len(),
                min_samples,
                "sample below min_sample_size; statistics may be unstable"
            );
        }

        let confidence_check = self.check_confidence_interval(&twin_values, &baseline_values);
        let deviation_check = self.check_early_deviation(
            &twin_values,
            &baseline_values,
            self.config.early_deviation_window_hours,
        );
        let drift_metrics = drift::compute_drift_metrics(&twin_values, &baseline_values);
        let metrics_comparison =
            comparison::build_metrics_comparison(&twin_values, &baseline_values);

        let detected = decision::is_detected(
            confidence_check.exceeded,
            deviation_check.detected,
            drift_metrics.drift_score,
        );

        debug!(
            twin = %twin.name,
            baseline = %baseline.name,
            ci_exceeded = confidence_check.exceeded,
            z_score = confidence_check.z_score,
            early_deviation = deviation_check.detected,
            deviation_percent = deviation_check.deviation_percent,
            drift_score = drift_metrics.drift_score,
            trend = %drift_metrics.trend_direction,
            "divergence checks complete"
        );
        if detected {
            info!(
                twin = %twin.name,
                baseline = %baseline.name,
                drift_score = drift_metrics.drift_score,
                "divergence detected"
            );
        }

        DivergenceResult {
            detected,
            confidence_interval_exceeded: confidence_check.exceeded,
            early_deviation_detected: deviation_check.detected,
            drift_score: drift_metrics.drift_score,
            confidence_check,
            deviation_check,
            drift_metrics,
            metrics_comparison,
            timestamp: at,
        }
    }

    /// Detect over a decoded request.
    pub fn detect_request(&self, request: &ComparisonRequest) -> DivergenceResult {
        self.detect(&request.twin, &request.baseline)
    }

    /// Confidence-interval check at the configured confidence level.
    pub fn check_confidence_interval(&self, twin: &[f64], baseline: &[f64]) -> ConfidenceCheck {
        confidence::check_confidence_interval(twin, baseline, self.config.confidence_threshold)
    }

    /// Early-deviation check at the configured threshold over `window_hours`.
    pub fn check_early_deviation(
        &self,
        twin: &[f64],
        baseline: &[f64],
        window_hours: f64,
    ) -> DeviationCheck {
        early_deviation::check_early_deviation(
            twin,
            baseline,
            window_hours,
            self.config.early_deviation_threshold,
        )
    }

    /// Drift metrics between two series, paired by index.
    pub fn compute_drift_metrics(&self, twin: &MetricSeries, baseline: &MetricSeries) -> DriftMetrics {
        drift::compute_drift_metrics(&extract_values(twin), &extract_values(baseline))
    }

    pub fn build_metrics_comparison(
        &self,
        twin: &MetricSeries,
        baseline: &MetricSeries,
    ) -> Vec<MetricComparison> {
        comparison::build_metrics_comparison(&extract_values(twin), &extract_values(baseline))
    }

    /// Strict escalation rule; see [`decision::is_significant_divergence`].
    pub fn is_significant_divergence(&self, result: &DivergenceResult) -> bool {
        decision::is_significant_divergence(result)
    }

    pub fn severity(&self, result: &DivergenceResult) -> DivergenceSeverity {
        decision::severity(result)
    }
}

impl IDivergenceDetector for Detector {
    fn detect(&self, twin: &MetricSeries, baseline: &MetricSeries) -> DivergenceResult {
        Detector::detect(self, twin, baseline)
    }

    fn is_significant(&self, result: &DivergenceResult) -> bool {
        self.is_significant_divergence(result)
    }
}
