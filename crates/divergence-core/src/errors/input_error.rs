//! Errors at the JSON request boundary.

use super::error_code::{self, DivergenceErrorCode};

/// Errors raised while decoding a comparison request.
///
/// Malformed timestamps surface here as `Json`; they never reach the detector.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid comparison request: {message}")]
    Json { message: String },

    #[error("Series name must not be empty ({role} series)")]
    EmptySeriesName { role: &'static str },
}

impl DivergenceErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Json {
            message: e.to_string(),
        }
    }
}
