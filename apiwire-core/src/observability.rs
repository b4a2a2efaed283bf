//! Structured logging setup
//!
//! The codec itself only emits `tracing` events: a `debug` event when a request
//! parameter is rejected and an `error` event right before a trusted literal
//! panics. Nothing is printed unless the embedding service installs a
//! subscriber. This module provides one for binaries and tests that do not
//! bring their own.
//!
//! # Usage Pattern
//!
//! Initialize logging once at startup, before handling requests:
//!
//! ```rust,no_run
//! use apiwire_core::LogConfig;
//!
//! let config = LogConfig::new("rpc-gateway").with_log_level("debug");
//! apiwire_core::init_logging(config).expect("Failed to init logging");
//!
//! tracing::info!("gateway started");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level filter (e.g., "info", "apiwire_core=debug"). When set
//!   it takes precedence over [`LogConfig::log_level`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
///
/// # Defaults
///
/// - Service name: "apiwire"
/// - Log level: From `RUST_LOG` env var, or "info"
/// - JSON output enabled
///
/// # Examples
///
/// ```rust
/// use apiwire_core::LogConfig;
///
/// let config = LogConfig::new("rpc-gateway")
///     .with_log_level("debug")
///     .with_json(false);
///
/// assert_eq!(config.log_level, "debug");
/// assert!(!config.json);
/// ```
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter
    ///
    /// Accepts any `EnvFilter` directive: "error", "warn", "info", "debug",
    /// "trace", or per-target forms such as "apiwire_core=debug".
    pub log_level: String,

    /// Emit one JSON object per event instead of human-readable lines
    pub json: bool,

    /// Include the source line number of each event
    pub line_numbers: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "apiwire".to_string(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: true,
            line_numbers: true,
        }
    }
}

impl LogConfig {
    /// Create a configuration with a custom service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set the log level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switch between JSON and plain text output
    pub fn with_json(mut self, enable: bool) -> Self {
        self.json = enable;
        self
    }

    /// Include or omit source line numbers
    pub fn with_line_numbers(mut self, enable: bool) -> Self {
        self.line_numbers = enable;
        self
    }
}

/// Install a global `tracing` subscriber
///
/// The subscriber consists of an `EnvFilter` (from `RUST_LOG`, falling back to
/// `config.log_level`) and a fmt layer that writes to stdout.
///
/// # Errors
///
/// - the log level is not a valid filter directive
/// - a global subscriber is already installed
///
/// Unlike `init()`, a second call returns an error instead of panicking, so
/// test binaries may call this from several tests.
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(config.line_numbers)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(config.line_numbers);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        json = config.json,
        "logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.service_name, "apiwire");
        assert!(config.json);
        assert!(config.line_numbers);
    }

    #[test]
    fn test_config_builder_chaining() {
        let config = LogConfig::new("gateway")
            .with_log_level("trace")
            .with_json(false)
            .with_line_numbers(false);

        assert_eq!(config.service_name, "gateway");
        assert_eq!(config.log_level, "trace");
        assert!(!config.json);
        assert!(!config.line_numbers);
    }

    #[test]
    fn test_config_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error"] {
            let config = LogConfig::default().with_log_level(*level);
            assert_eq!(config.log_level, *level);
        }
    }

    #[test]
    fn test_init_twice_is_an_error() {
        // The first call may already fail if another test installed a
        // subscriber; the second call must never succeed.
        let _ = init_logging(LogConfig::new("first").with_log_level("warn"));
        let second = init_logging(LogConfig::new("second").with_log_level("warn"));
        assert!(second.is_err());
    }
}
