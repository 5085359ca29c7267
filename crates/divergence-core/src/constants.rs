// Fixed constants of the detection algorithm. Tunable values live in config::defaults.

/// Hours covered by one full series when slicing the early-deviation window.
pub const HOURS_PER_SERIES: f64 = 24.0;

// --- Critical z-values (discrete lookup, not an inverse normal CDF) ---
pub const Z_99: f64 = 2.576;
pub const Z_95: f64 = 1.96;
pub const Z_90: f64 = 1.645;
pub const Z_85: f64 = 1.44;
pub const Z_80: f64 = 1.28;
pub const Z_FALLBACK: f64 = Z_95;

/// `(minimum confidence, critical z)` in descending confidence order.
pub const Z_TABLE: [(f64, f64); 5] = [
    (0.99, Z_99),
    (0.95, Z_95),
    (0.90, Z_90),
    (0.85, Z_85),
    (0.80, Z_80),
];

// --- Drift score weights (sum to 1.0) ---
pub const DRIFT_WEIGHT_MAD: f64 = 0.4;
pub const DRIFT_WEIGHT_RMSD: f64 = 0.4;
pub const DRIFT_WEIGHT_DISSIMILARITY: f64 = 0.2;

/// Trend slope must exceed this fraction of the MAD to count as a trend.
pub const TREND_SLOPE_FACTOR: f64 = 0.01;

// --- Decision thresholds ---
/// Drift score above which `detect` flags a divergence on its own.
pub const DETECTED_DRIFT_SCORE: f64 = 0.5;
/// Drift score that, combined with an early deviation, is significant.
pub const SIGNIFICANT_EARLY_DRIFT_SCORE: f64 = 0.3;
/// Drift score that is significant on its own.
pub const SIGNIFICANT_DRIFT_SCORE: f64 = 0.7;
