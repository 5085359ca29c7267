use serde::{Deserialize, Serialize};

/// Summary statistic compared in a [`MetricComparison`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatistic {
    Mean,
    StdDev,
    Min,
    Max,
}

impl ComparisonStatistic {
    pub const ALL: [ComparisonStatistic; 4] = [
        ComparisonStatistic::Mean,
        ComparisonStatistic::StdDev,
        ComparisonStatistic::Min,
        ComparisonStatistic::Max,
    ];
}

/// One row of the twin-vs-baseline statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub statistic: ComparisonStatistic,
    pub twin_value: f64,
    pub baseline_value: f64,
    /// `(twin - baseline) / |baseline|`; 0 when the baseline statistic is 0.
    pub deviation: f64,
}
