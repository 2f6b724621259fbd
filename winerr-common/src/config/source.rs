//! Tracks where each configuration value came from.

use std::fmt;

/// Origin of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    Environment,
    CommandLine,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Environment => f.write_str("environment"),
            Self::CommandLine => f.write_str("command line"),
        }
    }
}

/// A value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: ConfigSource,
    /// Environment variable the value was read from, if any.
    pub var: Option<String>,
}

impl<T> Sourced<T> {
    pub fn default_value(value: T) -> Self {
        Self {
            value,
            source: ConfigSource::Default,
            var: None,
        }
    }

    pub fn from_env(value: T, var: impl Into<String>) -> Self {
        Self {
            value,
            source: ConfigSource::Environment,
            var: Some(var.into()),
        }
    }

    /// Replaces the value with one given on the command line.
    pub fn override_cli(&mut self, value: T) {
        self.value = value;
        self.source = ConfigSource::CommandLine;
        self.var = None;
    }

    /// Human-readable origin, e.g. `environment (WINERR_FORMAT)`.
    pub fn describe(&self) -> String {
        match &self.var {
            Some(var) => format!("{} ({var})", self.source),
            None => self.source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_includes_variable() {
        let sourced = Sourced::from_env(true, "WINERR_JSON_LOGS");
        assert_eq!(sourced.describe(), "environment (WINERR_JSON_LOGS)");
        assert_eq!(Sourced::default_value(1).describe(), "default");
    }

    #[test]
    fn test_cli_override_replaces_origin() {
        let mut sourced = Sourced::from_env("warn".to_string(), "WINERR_LOG_LEVEL");
        sourced.override_cli("debug".to_string());
        assert_eq!(sourced.value, "debug");
        assert_eq!(sourced.source, ConfigSource::CommandLine);
        assert!(sourced.var.is_none());
    }
}
