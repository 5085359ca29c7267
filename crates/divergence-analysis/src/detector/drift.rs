//! Drift metrics over index-aligned deviations `d[i] = twin[i] - baseline[i]`.
//!
//! Points are paired by position, not by timestamp. The shorter series
//! bounds the comparison.

use divergence_core::constants::{
    DRIFT_WEIGHT_DISSIMILARITY, DRIFT_WEIGHT_MAD, DRIFT_WEIGHT_RMSD, TREND_SLOPE_FACTOR,
};
use divergence_core::models::{DriftMetrics, TrendDirection};

use crate::stats::{correlation, mean, ols_slope, range};

/// Compute MAD, RMSD, max deviation, correlation, trend and the drift score.
///
/// Returns [`DriftMetrics::zeroed`] when either input is empty.
pub fn compute_drift_metrics(twin: &[f64], baseline: &[f64]) -> DriftMetrics {
    let n = twin.len().min(baseline.len());
    if n == 0 {
        return DriftMetrics::zeroed();
    }
    let (twin, paired_baseline) = (&twin[..n], &baseline[..n]);

    let deviations: Vec<f64> = twin
        .iter()
        .zip(paired_baseline)
        .map(|(t, b)| t - b)
        .collect();
    let abs_deviations: Vec<f64> = deviations.iter().map(|d| d.abs()).collect();

    let mad = mean(&abs_deviations);
    let rmsd = (deviations.iter().map(|d| d * d).sum::<f64>() / n as f64).sqrt();
    let max_deviation = abs_deviations.iter().copied().fold(0.0, f64::max);
    let corr = correlation(twin, paired_baseline);

    DriftMetrics {
        drift_score: compute_drift_score(mad, rmsd, corr, baseline),
        mean_absolute_deviation: mad,
        root_mean_square_deviation: rmsd,
        max_deviation,
        correlation_coefficient: corr,
        trend_direction: trend_direction(&deviations, mad),
    }
}

/// Weighted blend of normalized MAD, normalized RMSD and correlation dissimilarity.
///
/// ```text
/// normalizer = range(baseline)  if > 0
///            | |mean(baseline)| if > 0
///            | 1
/// score = 0.4 * min(1, mad / normalizer)
///       + 0.4 * min(1, rmsd / normalizer)
///       + 0.2 * (1 - |correlation|)
/// ```
///
/// Clamped to [0.0, 1.0]. Returns 0.0 for an empty baseline, and 0.0 when
/// both MAD and RMSD are zero: pointwise-identical series carry no drift even
/// if their correlation is undefined (constant series).
pub fn compute_drift_score(mad: f64, rmsd: f64, correlation: f64, baseline: &[f64]) -> f64 {
    if baseline.is_empty() {
        return 0.0;
    }
    if mad == 0.0 && rmsd == 0.0 {
        return 0.0;
    }

    let baseline_range = range(baseline);
    let baseline_mean = mean(baseline).abs();
    let normalizer = if baseline_range > 0.0 {
        baseline_range
    } else if baseline_mean > 0.0 {
        baseline_mean
    } else {
        1.0
    };

    let normalized_mad = (mad / normalizer).min(1.0);
    let normalized_rmsd = (rmsd / normalizer).min(1.0);
    let dissimilarity = 1.0 - correlation.abs();

    let score = DRIFT_WEIGHT_MAD * normalized_mad
        + DRIFT_WEIGHT_RMSD * normalized_rmsd
        + DRIFT_WEIGHT_DISSIMILARITY * dissimilarity;

    score.clamp(0.0, 1.0)
}

/// Classify the OLS slope of `deviations` over index order.
///
/// The slope must exceed `1%` of the MAD in either direction to count.
/// Fewer than two points is always stable.
pub fn trend_direction(deviations: &[f64], mad: f64) -> TrendDirection {
    if deviations.len() < 2 {
        return TrendDirection::Stable;
    }
    let slope = ols_slope(deviations);
    let threshold = TREND_SLOPE_FACTOR * mad;

    if slope > threshold {
        TrendDirection::Increasing
    } else if slope < -threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}
