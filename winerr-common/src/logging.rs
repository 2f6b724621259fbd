//! Diagnostic logging through `tracing`.
//!
//! Results go to stdout, so diagnostics default to stderr.

use crate::config::{ConfigSource, Settings};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Error)]
pub enum LoggingError {
    /// The parser's own error repeats its cause through `source()`, so only
    /// its message is kept.
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("logging already initialized")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    filter: String,
    json: bool,
    stderr: bool,
    /// `RUST_LOG` text that failed to parse and was replaced by the default.
    ignored_rust_log: Option<String>,
}

impl LogConfig {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            json: false,
            stderr: true,
            ignored_rust_log: None,
        }
    }

    /// Derives the filter from settings. An explicit `WINERR_LOG_LEVEL` wins;
    /// otherwise a `RUST_LOG` directive is honored before the default level.
    ///
    /// `RUST_LOG` is shared with other tools, so an unparsable value falls back
    /// to the default level instead of failing. [`init_logging`] reports it.
    pub fn from_settings(settings: &Settings) -> Self {
        let default_level = settings.log_level.value.clone();
        let mut ignored_rust_log = None;
        let filter = match settings.log_level.source {
            ConfigSource::Default => match std::env::var("RUST_LOG") {
                Ok(directive) if directive.trim().is_empty() => default_level,
                Ok(directive) if EnvFilter::try_new(&directive).is_ok() => directive,
                Ok(directive) => {
                    ignored_rust_log = Some(directive);
                    default_level
                }
                Err(_) => default_level,
            },
            ConfigSource::Environment | ConfigSource::CommandLine => default_level,
        };
        Self {
            filter,
            json: settings.json_logs.value,
            stderr: true,
            ignored_rust_log,
        }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.filter = level.to_string();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.stderr = false;
        self
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// The rejected `RUST_LOG` value, if the default level replaced it.
    pub fn ignored_rust_log(&self) -> Option<&str> {
        self.ignored_rust_log.as_deref()
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|err| LoggingError::Filter {
            filter: self.filter.clone(),
            reason: err.to_string(),
        })
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails on an unparsable filter or when a global subscriber already exists.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);
    match (config.json, config.stderr) {
        (true, true) => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        (true, false) => registry.with(fmt::layer().json()).try_init()?,
        (false, true) => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        (false, false) => registry.with(fmt::layer()).try_init()?,
    }
    if let Some(directive) = &config.ignored_rust_log {
        warn!(
            rust_log = %directive,
            level = %config.filter,
            "ignoring unparsable RUST_LOG, using the default level"
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::config::{Sourced, env_test_lock};

    fn set_rust_log(value: Option<&str>) {
        // SAFETY: env access is serialized by env_test_lock
        unsafe {
            match value {
                Some(value) => std::env::set_var("RUST_LOG", value),
                None => std::env::remove_var("RUST_LOG"),
            }
        }
    }

    #[test]
    fn test_explicit_level_wins() {
        let mut settings = Settings::default();
        settings.log_level = Sourced::from_env("debug".to_string(), "WINERR_LOG_LEVEL");
        settings.json_logs = Sourced::from_env(true, "WINERR_JSON_LOGS");
        let config = LogConfig::from_settings(&settings);
        assert_eq!(config.filter(), "debug");
        assert!(config.is_json());
    }

    #[test]
    fn test_builder_methods() {
        let config = LogConfig::new("warn")
            .with_level("trace")
            .with_json(true)
            .with_stdout();
        assert_eq!(config.filter(), "trace");
        assert!(config.is_json());
        assert!(!config.stderr);
        assert!(config.with_stderr().stderr);
    }

    #[test]
    fn test_unparsable_rust_log_falls_back_to_default() {
        let _guard = env_test_lock();
        let saved = std::env::var("RUST_LOG").ok();
        set_rust_log(Some("winerr=bogus"));

        let config = LogConfig::from_settings(&Settings::default());
        set_rust_log(saved.as_deref());

        assert_eq!(config.filter(), "warn");
        assert_eq!(config.ignored_rust_log(), Some("winerr=bogus"));
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_valid_rust_log_is_used() {
        let _guard = env_test_lock();
        let saved = std::env::var("RUST_LOG").ok();
        set_rust_log(Some("winerr_common=trace"));

        let config = LogConfig::from_settings(&Settings::default());
        set_rust_log(saved.as_deref());

        assert_eq!(config.filter(), "winerr_common=trace");
        assert!(config.ignored_rust_log().is_none());
    }

    #[test]
    fn test_rust_log_ignored_when_level_is_explicit() {
        let _guard = env_test_lock();
        let saved = std::env::var("RUST_LOG").ok();
        set_rust_log(Some("winerr=bogus"));

        let mut settings = Settings::default();
        settings.log_level = Sourced::from_env("error".to_string(), "WINERR_LOG_LEVEL");
        let config = LogConfig::from_settings(&settings);
        set_rust_log(saved.as_deref());

        assert_eq!(config.filter(), "error");
        assert!(config.ignored_rust_log().is_none());
    }

    #[test]
    fn test_filter_error_reports_cause_once() {
        let err = LogConfig::new("winerr=bogus").env_filter().unwrap_err();
        let report = format!("{:#}", anyhow::Error::from(err));
        assert!(report.starts_with("invalid log filter 'winerr=bogus': "), "{report}");
        assert_eq!(
            report.matches("error parsing level filter").count(),
            1,
            "{report}"
        );
    }

    #[test]
    fn test_bad_filter_is_reported() {
        let config = LogConfig::new("winerr=notalevel");
        let err = config.env_filter().unwrap_err();
        assert!(err.to_string().contains("winerr=notalevel"));
    }
}
