//! Tests for the tracing setup.

use std::sync::Mutex;

use divergence_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_with_filter_does_not_panic() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("DIVERGENCE_LOG", "divergence_analysis=debug");
    init_tracing();
    std::env::remove_var("DIVERGENCE_LOG");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("DIVERGENCE_LOG", "==garbage==");
    init_tracing();
    std::env::remove_var("DIVERGENCE_LOG");
}
