//! Configuration for the divergence detector.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod defaults;
pub mod divergence_config;

pub use divergence_config::DivergenceConfig;
