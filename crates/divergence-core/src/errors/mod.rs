//! Error handling for the divergence detector.
//! One error enum per concern, `thiserror` only, zero `anyhow`.
//! Detection itself is total and never returns an error.

pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::DivergenceErrorCode;
pub use input_error::InputError;
