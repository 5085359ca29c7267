//! Value types for series input and detection output.

pub mod comparison_request;
pub mod confidence_check;
pub mod deviation_check;
pub mod divergence_result;
pub mod drift_metrics;
pub mod metric_comparison;
pub mod time_series;

pub use comparison_request::ComparisonRequest;
pub use confidence_check::ConfidenceCheck;
pub use deviation_check::DeviationCheck;
pub use divergence_result::{DivergenceResult, DivergenceSeverity};
pub use drift_metrics::{DriftMetrics, TrendDirection};
pub use metric_comparison::{ComparisonStatistic, MetricComparison};
pub use time_series::{MetricSeries, TimeSeriesPoint};
