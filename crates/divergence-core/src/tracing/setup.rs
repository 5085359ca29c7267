//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize logging for processes embedding the detector.
///
/// Reads the `DIVERGENCE_LOG` environment variable as an `EnvFilter` directive,
/// e.g. `DIVERGENCE_LOG=divergence_analysis=debug`.
/// Falls back to `divergence=info` if unset or invalid.
///
/// Idempotent. If another global subscriber is already installed, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
