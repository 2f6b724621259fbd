//! Environment variable parsing with type safety.
//!
//! Errors are collected rather than returned one at a time so every bad
//! variable can be reported at once.

use super::source::Sourced;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during environment variable parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("Invalid value for {var}: expected {expected}, got '{value}'")]
    InvalidValue {
        var: String,
        expected: String,
        value: String,
    },

    #[error("Invalid log level for {var}: {value}")]
    InvalidLogLevel { var: String, value: String },
}

/// Type-safe environment variable parser.
pub struct EnvParser {
    prefix: &'static str,
    errors: Vec<EnvError>,
}

impl EnvParser {
    /// Create a new parser with the `WINERR_` prefix.
    pub fn new() -> Self {
        Self {
            prefix: "WINERR_",
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[EnvError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<EnvError> {
        std::mem::take(&mut self.errors)
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Get a boolean value with default.
    ///
    /// Accepts: 1, true, yes, on (for true)
    ///          0, false, no, off, "" (for false)
    pub fn get_bool(&mut self, name: &str, default: bool) -> Sourced<bool> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => {
                let parsed = match value.to_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => true,
                    "0" | "false" | "no" | "off" | "" => false,
                    _ => {
                        self.errors.push(EnvError::InvalidValue {
                            var: var_name.clone(),
                            expected: "boolean (true/false/1/0/yes/no)".to_string(),
                            value: value.clone(),
                        });
                        default
                    }
                };
                Sourced::from_env(parsed, var_name)
            }
            Err(_) => Sourced::default_value(default),
        }
    }

    /// Get any `FromStr` value, recording `expected` in the error on failure.
    pub fn get_parsed<T>(&mut self, name: &str, default: T, expected: &str) -> Sourced<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match value.trim().parse::<T>() {
                Ok(parsed) => Sourced::from_env(parsed, var_name),
                Err(_) => {
                    self.errors.push(EnvError::InvalidValue {
                        var: var_name,
                        expected: expected.to_string(),
                        value,
                    });
                    Sourced::default_value(default)
                }
            },
            Err(_) => Sourced::default_value(default),
        }
    }

    /// Get a log level value with validation.
    pub fn get_log_level(&mut self, name: &str, default: &str) -> Sourced<String> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => {
                let lower = value.to_lowercase();
                match lower.as_str() {
                    "trace" | "debug" | "info" | "warn" | "error" | "off" => {
                        Sourced::from_env(lower, var_name)
                    }
                    _ => {
                        self.errors.push(EnvError::InvalidLogLevel {
                            var: var_name.clone(),
                            value: value.clone(),
                        });
                        Sourced::from_env(default.to_string(), var_name)
                    }
                }
            }
            Err(_) => Sourced::default_value(default.to_string()),
        }
    }

    /// Get a comma-separated list of paths, expanding a leading `~/`.
    pub fn get_path_list(&mut self, name: &str) -> Sourced<Vec<PathBuf>> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => {
                let paths = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(expand_home)
                    .collect();
                Sourced::from_env(paths, var_name)
            }
            Err(_) => Sourced::default_value(Vec::new()),
        }
    }
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a leading `~/` to the home directory when one is known.
pub fn expand_home(value: &str) -> PathBuf {
    if let Some(stripped) = value.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(value)
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::config::env_test_lock;
    use crate::config::source::ConfigSource;

    fn cleanup_env(vars: &[&str]) {
        for var in vars {
            // SAFETY: env access is serialized by env_test_lock
            unsafe { env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: env access is serialized by env_test_lock
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn test_get_bool_true_values() {
        let _guard = env_test_lock();
        let vars = ["WINERR_TEST_BOOL_TRUE"];
        cleanup_env(&vars);

        for val in &["1", "true", "yes", "on", "TRUE", "Yes"] {
            set_env("WINERR_TEST_BOOL_TRUE", val);
            let mut parser = EnvParser::new();
            let result = parser.get_bool("TEST_BOOL_TRUE", false);
            assert!(result.value, "Expected true for '{}'", val);
            assert!(!parser.has_errors());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_invalid_uses_default() {
        let _guard = env_test_lock();
        let vars = ["WINERR_BAD_BOOL"];
        cleanup_env(&vars);

        set_env("WINERR_BAD_BOOL", "maybe");
        let mut parser = EnvParser::new();
        let result = parser.get_bool("BAD_BOOL", false);
        assert!(!result.value);
        assert!(parser.has_errors());

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_unset_is_default() {
        let _guard = env_test_lock();
        cleanup_env(&["WINERR_UNSET_BOOL"]);

        let mut parser = EnvParser::new();
        let result = parser.get_bool("UNSET_BOOL", true);
        assert!(result.value);
        assert_eq!(result.source, ConfigSource::Default);
    }

    #[test]
    fn test_get_parsed_invalid_records_error() {
        let _guard = env_test_lock();
        let vars = ["WINERR_TEST_PARSED"];
        cleanup_env(&vars);

        set_env("WINERR_TEST_PARSED", "lots");
        let mut parser = EnvParser::new();
        let result = parser.get_parsed::<u32>("TEST_PARSED", 7, "unsigned integer");
        assert_eq!(result.value, 7);
        let errors = parser.take_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("unsigned integer"));
        assert!(!parser.has_errors());

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_log_level_normalizes_case() {
        let _guard = env_test_lock();
        let vars = ["WINERR_TEST_LEVEL"];
        cleanup_env(&vars);

        set_env("WINERR_TEST_LEVEL", "DEBUG");
        let mut parser = EnvParser::new();
        assert_eq!(parser.get_log_level("TEST_LEVEL", "warn").value, "debug");

        set_env("WINERR_TEST_LEVEL", "loud");
        let mut parser = EnvParser::new();
        assert_eq!(parser.get_log_level("TEST_LEVEL", "warn").value, "warn");
        assert!(matches!(
            parser.errors()[0],
            EnvError::InvalidLogLevel { .. }
        ));

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_path_list_splits_and_expands() {
        let _guard = env_test_lock();
        let vars = ["WINERR_TEST_PATHS"];
        cleanup_env(&vars);

        set_env("WINERR_TEST_PATHS", "/etc/a.toml, ,~/b.toml");
        let mut parser = EnvParser::new();
        let result = parser.get_path_list("TEST_PATHS");
        assert_eq!(result.value.len(), 2);
        assert_eq!(result.value[0], PathBuf::from("/etc/a.toml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(result.value[1], home.join("b.toml"));
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        assert_eq!(expand_home("defs.toml"), PathBuf::from("defs.toml"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));
    }
}
