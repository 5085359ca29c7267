//! # divergence-core
//!
//! Foundation crate for the divergence detector.
//! Defines the series and result models, config, errors, traits, and constants.
//! The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DivergenceConfig;
pub use errors::{ConfigError, InputError};
pub use models::{
    ComparisonRequest, ConfidenceCheck, DeviationCheck, DivergenceResult, DivergenceSeverity,
    DriftMetrics, MetricComparison, MetricSeries, TimeSeriesPoint, TrendDirection,
};
pub use traits::IDivergenceDetector;
