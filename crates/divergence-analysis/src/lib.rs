//! # divergence-analysis
//!
//! Decides whether a twin metric series has diverged from its baseline.
//! Three independent checks (confidence interval, early deviation, drift
//! score) combine into one [`DivergenceResult`](divergence_core::DivergenceResult).

pub mod detector;
pub mod stats;
pub mod window;

pub use detector::Detector;
