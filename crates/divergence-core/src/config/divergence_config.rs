//! Detector configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Immutable detector configuration.
///
/// Resolution order for [`DivergenceConfig::load`] (highest priority first):
/// 1. Environment variables (`DIVERGENCE_*`)
/// 2. Project config (`divergence.toml`, `[detector]` table)
/// 3. Compiled defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivergenceConfig {
    /// Confidence level for the interval check. Default: 0.95.
    pub confidence_threshold: f64,
    /// Relative deviation (fraction) that flags an early deviation. Default: 0.15.
    pub early_deviation_threshold: f64,
    /// Reserved. Not consulted by the default detection path. Default: 10.
    pub min_sample_size: usize,
    /// Width of the early-deviation window in hours, relative to a 24h series. Default: 24.
    pub early_deviation_window_hours: f64,
}

impl Default for DivergenceConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            early_deviation_threshold: defaults::DEFAULT_EARLY_DEVIATION_THRESHOLD,
            min_sample_size: defaults::DEFAULT_MIN_SAMPLE_SIZE,
            early_deviation_window_hours: defaults::DEFAULT_EARLY_DEVIATION_WINDOW_HOURS,
        }
    }
}

/// On-disk shape of `divergence.toml`. Unknown tables are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    detector: DivergenceConfig,
}

impl DivergenceConfig {
    /// Load configuration with 3-layer resolution and validate the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            config = Self::read_toml_file(&project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML document string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse_document(toml_str, "<string>")
    }

    /// Serialize the config back to a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let doc = ConfigDocument { detector: *self };
        toml::to_string_pretty(&doc).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = self.confidence_threshold;
        if !c.is_finite() || c <= 0.0 || c >= 1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "detector.confidence_threshold".to_string(),
                message: "must be strictly between 0.0 and 1.0".to_string(),
            });
        }
        let t = self.early_deviation_threshold;
        if !t.is_finite() || t < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "detector.early_deviation_threshold".to_string(),
                message: "must be a finite, non-negative fraction".to_string(),
            });
        }
        let h = self.early_deviation_window_hours;
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "detector.early_deviation_window_hours".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn read_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse_document(&content, &path.display().to_string())
    }

    fn parse_document(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(doc.detector)
    }

    /// Apply environment variable overrides.
    /// Pattern: `DIVERGENCE_CONFIDENCE_THRESHOLD`, `DIVERGENCE_MIN_SAMPLE_SIZE`, etc.
    fn apply_env_overrides(config: &mut DivergenceConfig) {
        if let Some(v) = env_parse::<f64>("DIVERGENCE_CONFIDENCE_THRESHOLD") {
            config.confidence_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("DIVERGENCE_EARLY_DEVIATION_THRESHOLD") {
            config.early_deviation_threshold = v;
        }
        if let Some(v) = env_parse::<usize>("DIVERGENCE_MIN_SAMPLE_SIZE") {
            config.min_sample_size = v;
        }
        if let Some(v) = env_parse::<f64>("DIVERGENCE_EARLY_DEVIATION_WINDOW_HOURS") {
            config.early_deviation_window_hours = v;
        }
    }
}

/// Read and parse an env var. Unparseable values are logged and skipped.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config override");
            None
        }
    }
}
