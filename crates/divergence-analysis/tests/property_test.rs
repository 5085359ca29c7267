use chrono::{Duration, TimeZone, Utc};
use divergence_analysis::detector::{compute_drift_metrics, is_significant_divergence};
use divergence_analysis::stats::{correlation, std_dev};
use divergence_analysis::Detector;
use divergence_core::models::{MetricSeries, TrendDirection};
use proptest::prelude::*;

fn series(name: &str, values: &[f64]) -> MetricSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    MetricSeries::from_values(name, start, Duration::minutes(5), values)
}

fn arb_values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 0..max_len)
}

proptest! {
    #[test]
    fn drift_score_is_bounded(twin in arb_values(64), baseline in arb_values(64)) {
        let m = compute_drift_metrics(&twin, &baseline);
        prop_assert!(m.drift_score.is_finite());
        prop_assert!((0.0..=1.0).contains(&m.drift_score));
        prop_assert!(m.correlation_coefficient.abs() <= 1.0 + 1e-9);
        prop_assert!(m.root_mean_square_deviation + 1e-9 >= m.mean_absolute_deviation);
        prop_assert!(m.max_deviation + 1e-9 >= m.mean_absolute_deviation);
    }

    #[test]
    fn detection_output_is_always_finite(twin in arb_values(48), baseline in arb_values(48)) {
        let detector = Detector::default();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let result = detector.detect_at(&series("twin", &twin), &series("baseline", &baseline), at);

        let c = result.confidence_check;
        for v in [c.twin_mean, c.baseline_mean, c.lower_bound, c.upper_bound, c.z_score, c.standard_error] {
            prop_assert!(v.is_finite());
        }
        prop_assert!(result.deviation_check.deviation_percent.is_finite());
        for row in &result.metrics_comparison {
            prop_assert!(row.deviation.is_finite());
        }
    }

    #[test]
    fn detect_at_is_deterministic(twin in arb_values(32), baseline in arb_values(32)) {
        let detector = Detector::default();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let (t, b) = (series("twin", &twin), series("baseline", &baseline));
        prop_assert_eq!(detector.detect_at(&t, &b, at), detector.detect_at(&t, &b, at));
    }

    #[test]
    fn identical_series_have_no_drift(values in arb_values(64)) {
        let m = compute_drift_metrics(&values, &values);
        prop_assert_eq!(m.mean_absolute_deviation, 0.0);
        prop_assert_eq!(m.root_mean_square_deviation, 0.0);
        prop_assert_eq!(m.drift_score, 0.0);
        prop_assert_eq!(m.trend_direction, TrendDirection::Stable);
        if std_dev(&values, None) > 1e-6 {
            prop_assert!((m.correlation_coefficient - 1.0).abs() < 1e-9);
        }

        let detector = Detector::default();
        let s = series("s", &values);
        prop_assert!(!detector.detect(&s, &s).confidence_interval_exceeded);
    }

    #[test]
    fn confidence_interval_exceeded_is_always_significant(
        twin in arb_values(32),
        baseline in arb_values(32),
    ) {
        let detector = Detector::default();
        let result = detector.detect(&series("twin", &twin), &series("baseline", &baseline));
        if result.confidence_interval_exceeded {
            prop_assert!(result.detected);
            prop_assert!(is_significant_divergence(&result));
        }
        if is_significant_divergence(&result) {
            prop_assert!(result.detected);
        }
    }

    #[test]
    fn correlation_is_symmetric(x in arb_values(32), y in arb_values(32)) {
        prop_assert!((correlation(&x, &y) - correlation(&y, &x)).abs() < 1e-9);
    }
}
