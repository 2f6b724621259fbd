//! Runtime settings read from `WINERR_*` environment variables.
//!
//! | Variable             | Default | Meaning                                    |
//! |----------------------|---------|--------------------------------------------|
//! | `WINERR_LOG_LEVEL`   | `warn`  | tracing level for diagnostics on stderr    |
//! | `WINERR_FORMAT`      | `text`  | output format, `text` or `json`            |
//! | `WINERR_DEFINITIONS` | empty   | comma-separated definition files, `~` ok   |
//! | `WINERR_JSON_LOGS`   | `false` | emit diagnostics as JSON lines             |
//!
//! Command-line flags override these; see [`Sourced::override_cli`].

pub mod env;
pub mod source;

pub use env::{EnvError, EnvParser, expand_home};
pub use source::{ConfigSource, Sourced};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Every invalid variable found while loading [`Settings`].
#[derive(Debug, Error)]
#[error("invalid environment configuration: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct SettingsError {
    pub errors: Vec<EnvError>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub log_level: Sourced<String>,
    pub format: Sourced<OutputFormat>,
    pub definitions: Sourced<Vec<PathBuf>>,
    pub json_logs: Sourced<bool>,
}

impl Settings {
    /// Reads all settings, failing if any variable is malformed.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut parser = EnvParser::new();
        let settings = Self {
            log_level: parser.get_log_level("LOG_LEVEL", "warn"),
            format: parser.get_parsed("FORMAT", OutputFormat::Text, "text or json"),
            definitions: parser.get_path_list("DEFINITIONS"),
            json_logs: parser.get_bool("JSON_LOGS", false),
        };
        if parser.has_errors() {
            return Err(SettingsError {
                errors: parser.take_errors(),
            });
        }
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Sourced::default_value("warn".to_string()),
            format: Sourced::default_value(OutputFormat::Text),
            definitions: Sourced::default_value(Vec::new()),
            json_logs: Sourced::default_value(false),
        }
    }
}

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "WINERR_LOG_LEVEL",
        "WINERR_FORMAT",
        "WINERR_DEFINITIONS",
        "WINERR_JSON_LOGS",
    ];

    fn clear() {
        for var in VARS {
            // SAFETY: env access is serialized by env_test_lock
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let _guard = env_test_lock();
        clear();

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.log_level.value, "warn");
        assert_eq!(settings.format.value, OutputFormat::Text);
        assert!(settings.definitions.value.is_empty());
        assert!(!settings.json_logs.value);
        assert_eq!(settings.format.source, ConfigSource::Default);
    }

    #[test]
    fn test_reads_environment() {
        let _guard = env_test_lock();
        clear();
        // SAFETY: env access is serialized by env_test_lock
        unsafe {
            std::env::set_var("WINERR_FORMAT", "JSON");
            std::env::set_var("WINERR_DEFINITIONS", "/tmp/a.toml,/tmp/b.toml");
            std::env::set_var("WINERR_JSON_LOGS", "yes");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.format.value, OutputFormat::Json);
        assert_eq!(settings.format.var.as_deref(), Some("WINERR_FORMAT"));
        assert_eq!(settings.definitions.value.len(), 2);
        assert!(settings.json_logs.value);

        clear();
    }

    #[test]
    fn test_collects_every_bad_variable() {
        let _guard = env_test_lock();
        clear();
        // SAFETY: env access is serialized by env_test_lock
        unsafe {
            std::env::set_var("WINERR_FORMAT", "yaml");
            std::env::set_var("WINERR_LOG_LEVEL", "chatty");
        }

        let err = Settings::from_env().unwrap_err();
        assert_eq!(err.errors.len(), 2);
        let message = err.to_string();
        assert!(message.contains("WINERR_FORMAT"));
        assert!(message.contains("WINERR_LOG_LEVEL"));

        clear();
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
