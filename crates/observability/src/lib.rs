//! Tracing/logging setup shared by catalog binaries and tests.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// invalid `CATALOG_LOG_FORMAT` falls back to the default format.
pub fn init() {
    let config = config::ObservabilityConfig::from_env().unwrap_or_default();
    tracing::init(&config);
}

/// Configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
