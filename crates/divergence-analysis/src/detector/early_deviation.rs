//! Early-deviation check over a proportional trailing slice.
//!
//! The window is an element count, not a time filter: `window_hours / 24` of
//! the twin's length, at least one element. Callers that need a real time
//! window filter the series with [`crate::window`] first.

use divergence_core::constants::HOURS_PER_SERIES;
use divergence_core::models::DeviationCheck;

use crate::stats::mean;
use crate::window::tail;

/// `max(1, floor(twin_len * window_hours / 24))`.
pub fn early_window_size(twin_len: usize, window_hours: f64) -> usize {
    let scaled = (twin_len as f64 * window_hours / HOURS_PER_SERIES).floor();
    // `as` saturates: negative and NaN become 0, huge values become usize::MAX.
    (scaled as usize).max(1)
}

/// Compare the means of the trailing windows of both series.
///
/// `deviation_percent` is relative to the baseline window mean. When that
/// mean is zero the deviation is 1.0 if the twin moved at all, 0.0 otherwise.
pub fn check_early_deviation(
    twin: &[f64],
    baseline: &[f64],
    window_hours: f64,
    threshold: f64,
) -> DeviationCheck {
    let size = early_window_size(twin.len(), window_hours);
    let twin_window_mean = mean(tail(twin, size));
    let baseline_window_mean = mean(tail(baseline, size));

    let deviation_percent = if baseline_window_mean == 0.0 {
        if twin_window_mean != 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        (twin_window_mean - baseline_window_mean).abs() / baseline_window_mean.abs()
    };

    DeviationCheck {
        detected: deviation_percent > threshold,
        deviation_percent,
        window_hours,
        twin_window_mean,
        baseline_window_mean,
        threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_is_proportional() {
        assert_eq!(early_window_size(48, 24.0), 48);
        assert_eq!(early_window_size(48, 6.0), 12);
        assert_eq!(early_window_size(10, 1.0), 1); // floor(0.41) -> clamp to 1
        assert_eq!(early_window_size(0, 24.0), 1);
    }

    #[test]
    fn zero_baseline_with_moving_twin_is_full_deviation() {
        let check = check_early_deviation(&[1.0, 2.0], &[0.0, 0.0], 24.0, 0.15);
        assert_eq!(check.deviation_percent, 1.0);
        assert!(check.detected);
    }

    #[test]
    fn zero_baseline_and_zero_twin_is_no_deviation() {
        let check = check_early_deviation(&[0.0, 0.0], &[0.0, 0.0], 24.0, 0.15);
        assert_eq!(check.deviation_percent, 0.0);
        assert!(!check.detected);
    }

    #[test]
    fn only_the_tail_is_compared() {
        // 8 points, 6h window -> last 2 points.
        let twin = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 20.0, 20.0];
        let baseline = [10.0; 8];
        let check = check_early_deviation(&twin, &baseline, 6.0, 0.15);
        assert_eq!(check.twin_window_mean, 20.0);
        assert_eq!(check.baseline_window_mean, 10.0);
        assert_eq!(check.deviation_percent, 1.0);
        assert!(check.detected);
        assert_eq!(check.window_hours, 6.0);
    }

    #[test]
    fn threshold_is_strict() {
        let check = check_early_deviation(&[12.5], &[10.0], 24.0, 0.25);
        assert_eq!(check.deviation_percent, 0.25);
        assert!(!check.detected);
    }
}
