use divergence_core::models::{ComparisonStatistic, MetricComparison};

use crate::stats::{max, mean, min, relative_deviation, std_dev};

/// One row per summary statistic (mean, stddev, min, max).
///
/// Empty when either series is empty.
pub fn build_metrics_comparison(twin: &[f64], baseline: &[f64]) -> Vec<MetricComparison> {
    if twin.is_empty() || baseline.is_empty() {
        return Vec::new();
    }

    ComparisonStatistic::ALL
        .iter()
        .map(|&statistic| {
            let twin_value = summarize(statistic, twin);
            let baseline_value = summarize(statistic, baseline);
            MetricComparison {
                statistic,
                twin_value,
                baseline_value,
                deviation: relative_deviation(twin_value, baseline_value),
            }
        })
        .collect()
}

fn summarize(statistic: ComparisonStatistic, values: &[f64]) -> f64 {
    match statistic {
        ComparisonStatistic::Mean => mean(values),
        ComparisonStatistic::StdDev => std_dev(values, None),
        ComparisonStatistic::Min => min(values).unwrap_or(0.0),
        ComparisonStatistic::Max => max(values).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_side_yields_no_rows() {
        assert!(build_metrics_comparison(&[], &[1.0]).is_empty());
        assert!(build_metrics_comparison(&[1.0], &[]).is_empty());
    }

    #[test]
    fn four_rows_in_fixed_order() {
        let rows = build_metrics_comparison(&[2.0, 4.0], &[1.0, 3.0]);
        let stats: Vec<_> = rows.iter().map(|r| r.statistic).collect();
        assert_eq!(stats, ComparisonStatistic::ALL.to_vec());

        let mean_row = rows[0];
        assert_eq!(mean_row.twin_value, 3.0);
        assert_eq!(mean_row.baseline_value, 2.0);
        assert_eq!(mean_row.deviation, 0.5);

        let min_row = rows[2];
        assert_eq!(min_row.deviation, 1.0);
    }

    #[test]
    fn zero_baseline_statistic_guards_deviation() {
        // Baseline is constant -> its stddev is 0.
        let rows = build_metrics_comparison(&[1.0, 5.0], &[3.0, 3.0]);
        let sd_row = rows[1];
        assert_eq!(sd_row.baseline_value, 0.0);
        assert_eq!(sd_row.twin_value, 2.0);
        assert_eq!(sd_row.deviation, 0.0);
    }
}
