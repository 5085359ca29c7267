//! The two decision rules over a computed result.
//!
//! `is_detected` is the loose "something moved" flag stored in the result;
//! `is_significant_divergence` is the stricter escalation rule. They are
//! intentionally different and evaluated independently.

use divergence_core::constants::{
    DETECTED_DRIFT_SCORE, SIGNIFICANT_DRIFT_SCORE, SIGNIFICANT_EARLY_DRIFT_SCORE,
};
use divergence_core::models::{DivergenceResult, DivergenceSeverity};

/// Any one signal fires: interval exceeded, early deviation, or drift score > 0.5.
pub fn is_detected(
    confidence_interval_exceeded: bool,
    early_deviation_detected: bool,
    drift_score: f64,
) -> bool {
    confidence_interval_exceeded
        || early_deviation_detected
        || drift_score > DETECTED_DRIFT_SCORE
}

/// Escalation rule.
///
/// - interval exceeded: always significant
/// - early deviation: significant when drift score > 0.3
/// - otherwise: significant when drift score > 0.7
pub fn is_significant_divergence(result: &DivergenceResult) -> bool {
    if result.confidence_interval_exceeded {
        return true;
    }
    if result.early_deviation_detected && result.drift_score > SIGNIFICANT_EARLY_DRIFT_SCORE {
        return true;
    }
    result.drift_score > SIGNIFICANT_DRIFT_SCORE
}

/// Fold both rules into one ordered label. Significance wins over detection.
pub fn severity(result: &DivergenceResult) -> DivergenceSeverity {
    if is_significant_divergence(result) {
        DivergenceSeverity::Significant
    } else if result.detected {
        DivergenceSeverity::Detected
    } else {
        DivergenceSeverity::None
    }
}
