// Single source of truth for all default values.

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.95;
pub const DEFAULT_EARLY_DEVIATION_THRESHOLD: f64 = 0.15; // 15%
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_EARLY_DEVIATION_WINDOW_HOURS: f64 = 24.0;

pub const PROJECT_CONFIG_FILENAME: &str = "divergence.toml";
pub const DEFAULT_LOG_FILTER: &str = "divergence=info";
pub const LOG_ENV_VAR: &str = "DIVERGENCE_LOG";
