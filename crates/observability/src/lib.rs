//! Tracing/logging setup shared by binaries and integration tests.

/// Logging configuration (filter + output format).
pub mod config;

/// Tracing subscriber initialization.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unparseable `CODEFIX_LOG_FORMAT` falls back to the default format.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    tracing::init_with(&config);
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
