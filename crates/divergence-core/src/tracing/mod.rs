//! Observability for the divergence detector.
//! `tracing` crate with `EnvFilter`, filter read from `DIVERGENCE_LOG`.

pub mod setup;

pub use setup::init_tracing;
