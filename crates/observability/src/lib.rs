//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::ObservabilityConfig::from_env());
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
