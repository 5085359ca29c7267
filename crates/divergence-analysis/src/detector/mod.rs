//! Twin-vs-baseline divergence detection.
//!
//! Each sub-check is a free function over value slices so it can be called
//! on its own; [`Detector`] binds them to one configuration.

pub mod comparison;
pub mod confidence;
pub mod decision;
pub mod drift;
pub mod early_deviation;
pub mod engine;

pub use comparison::build_metrics_comparison;
pub use confidence::check_confidence_interval;
pub use decision::{is_detected, is_significant_divergence, severity};
pub use drift::{compute_drift_metrics, compute_drift_score, trend_direction};
pub use early_deviation::{check_early_deviation, early_window_size};
pub use engine::Detector;
