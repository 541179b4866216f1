//! Environment variable parsing with type safety.
//!
//! Provides a type-safe parser for `PROGERR_*` environment variables with
//! validation, error collection, and source tracking.

use super::source::Sourced;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Prefix shared by every variable the crate reads.
pub const ENV_PREFIX: &str = "PROGERR_";

/// Errors that can occur during environment variable parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Invalid value for a variable.
    #[error("Invalid value for {var}: expected {expected}, got '{value}'")]
    InvalidValue {
        var: String,
        expected: String,
        value: String,
    },

    /// Path does not exist.
    #[error("Path not found for {var}: {}", .path.display())]
    PathNotFound { var: String, path: PathBuf },

    /// Invalid log level.
    #[error("Invalid log level for {var}: {value}")]
    InvalidLogLevel { var: String, value: String },
}

/// Type-safe environment variable parser.
///
/// Collects errors during parsing so all issues can be reported at once.
pub struct EnvParser {
    prefix: &'static str,
    errors: Vec<EnvError>,
}

impl EnvParser {
    /// Create a new parser with the `PROGERR_` prefix.
    pub fn new() -> Self {
        Self {
            prefix: ENV_PREFIX,
            errors: Vec::new(),
        }
    }

    /// Get all accumulated errors.
    pub fn errors(&self) -> &[EnvError] {
        &self.errors
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take ownership of errors.
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
            Ok(value) => match parse_bool(&value) {
                Some(parsed) => Sourced::from_env(parsed, var_name),
                None => {
                    self.errors.push(EnvError::InvalidValue {
                        var: var_name.clone(),
                        expected: "boolean (true/false/1/0/yes/no)".to_string(),
                        value,
                    });
                    Sourced::default_value(default)
                }
            },
            Err(_) => Sourced::default_value(default),
        }
    }

    /// Get a path value with ~ expansion.
    ///
    /// `None` when the variable is unset or empty. If `must_exist` is true,
    /// records an error if the path doesn't exist.
    pub fn get_path(&mut self, name: &str, must_exist: bool) -> Sourced<Option<PathBuf>> {
        let var_name = self.var_name(name);
        let value = match env::var(&var_name) {
            Ok(v) if !v.is_empty() => v,
            Ok(_) => return Sourced::from_env(None, var_name),
            Err(_) => return Sourced::default_value(None),
        };

        let expanded = expand_home(&value);
        if must_exist && !expanded.exists() {
            self.errors.push(EnvError::PathNotFound {
                var: var_name.clone(),
                path: expanded.clone(),
            });
        }

        Sourced::from_env(Some(expanded), var_name)
    }

    /// Get a log level value with validation.
    pub fn get_log_level(&mut self, name: &str, default: &str) -> Sourced<String> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match parse_log_level(&value) {
                Some(level) => Sourced::from_env(level, var_name),
                None => {
                    self.errors.push(EnvError::InvalidLogLevel {
                        var: var_name.clone(),
                        value,
                    });
                    Sourced::from_env(default.to_string(), var_name)
                }
            },
            Err(_) => Sourced::default_value(default.to_string()),
        }
    }

    /// Get a comma-separated list of strings.
    pub fn get_string_list(&mut self, name: &str, default: Vec<String>) -> Sourced<Vec<String>> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => Sourced::from_env(parse_string_list(&value), var_name),
            Err(_) => Sourced::default_value(default),
        }
    }
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_log_level(value: &str) -> Option<String> {
    let lower = value.to_lowercase();
    match lower.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Some(lower),
        _ => None,
    }
}

fn parse_string_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(value: &str) -> PathBuf {
    if let Some(stripped) = value.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(value)
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::config::env_test_lock;
    use crate::config::source::ConfigSource;
    use std::env;

    fn cleanup_env(vars: &[&str]) {
        for var in vars {
            // SAFETY: Tests are serialized via env_test_lock
            unsafe { env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: Tests are serialized via env_test_lock
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn test_get_bool_true_values() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_TEST_BOOL_TRUE"];
        cleanup_env(&vars);

        for val in &["1", "true", "yes", "on", "TRUE", "Yes"] {
            set_env("PROGERR_TEST_BOOL_TRUE", val);
            let mut parser = EnvParser::new();
            let result = parser.get_bool("TEST_BOOL_TRUE", false);
            assert!(result.value, "Expected true for '{}'", val);
            assert!(!parser.has_errors());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_false_values() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_TEST_BOOL_FALSE"];
        cleanup_env(&vars);

        for val in &["0", "false", "no", "off", "FALSE", ""] {
            set_env("PROGERR_TEST_BOOL_FALSE", val);
            let mut parser = EnvParser::new();
            let result = parser.get_bool("TEST_BOOL_FALSE", true);
            assert!(!result.value, "Expected false for '{}'", val);
            assert!(!parser.has_errors());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_invalid_uses_default() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_BAD_BOOL"];
        cleanup_env(&vars);

        set_env("PROGERR_BAD_BOOL", "maybe");
        let mut parser = EnvParser::new();
        let result = parser.get_bool("BAD_BOOL", false);
        assert!(!result.value);
        assert_eq!(result.source, ConfigSource::Default);
        assert_eq!(
            parser.take_errors(),
            vec![EnvError::InvalidValue {
                var: "PROGERR_BAD_BOOL".to_string(),
                expected: "boolean (true/false/1/0/yes/no)".to_string(),
                value: "maybe".to_string(),
            }]
        );
        assert!(!parser.has_errors());

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_log_level_valid() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_LOG_LEVEL"];
        cleanup_env(&vars);

        for level in &["trace", "debug", "info", "warn", "error", "DEBUG", "INFO"] {
            set_env("PROGERR_LOG_LEVEL", level);
            let mut parser = EnvParser::new();
            let result = parser.get_log_level("LOG_LEVEL", "info");
            assert!(!parser.has_errors(), "Expected valid for '{}'", level);
            assert_eq!(result.value, level.to_lowercase());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_log_level_invalid() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_LOG_LEVEL_BAD"];
        cleanup_env(&vars);

        set_env("PROGERR_LOG_LEVEL_BAD", "verbose");
        let mut parser = EnvParser::new();
        let result = parser.get_log_level("LOG_LEVEL_BAD", "info");
        assert!(parser.has_errors());
        assert_eq!(result.value, "info");

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_string_list() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_TEST_LIST"];
        cleanup_env(&vars);

        set_env("PROGERR_TEST_LIST", "anchor, token,,");
        let mut parser = EnvParser::new();
        let result = parser.get_string_list("TEST_LIST", vec![]);
        assert_eq!(result.value, vec!["anchor", "token"]);

        // Empty value clears the list rather than falling back
        set_env("PROGERR_TEST_LIST", "");
        let mut parser = EnvParser::new();
        let result = parser.get_string_list("TEST_LIST", vec!["anchor".to_string()]);
        assert!(result.value.is_empty());
        assert!(result.is_from_env());

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_path_must_exist() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_TEST_PATH"];
        cleanup_env(&vars);

        let mut parser = EnvParser::new();
        let result = parser.get_path("TEST_PATH", true);
        assert_eq!(result.value, None);
        assert_eq!(result.source, ConfigSource::Default);
        assert!(!parser.has_errors());

        set_env("PROGERR_TEST_PATH", "/definitely/not/here/progerr.toml");
        let mut parser = EnvParser::new();
        let result = parser.get_path("TEST_PATH", true);
        assert_eq!(
            result.value,
            Some(PathBuf::from("/definitely/not/here/progerr.toml"))
        );
        assert!(matches!(
            parser.errors(),
            [EnvError::PathNotFound { .. }]
        ));

        cleanup_env(&vars);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/etc/progerr.toml"), PathBuf::from("/etc/progerr.toml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.toml"), home.join("x.toml"));
        }
    }

    #[test]
    fn test_source_tracking() {
        let _guard = env_test_lock();
        let vars = ["PROGERR_TEST_SRC"];
        cleanup_env(&vars);

        let mut parser = EnvParser::new();
        let result = parser.get_bool("TEST_SRC", true);
        assert_eq!(result.source, ConfigSource::Default);
        assert!(result.env_var.is_none());

        set_env("PROGERR_TEST_SRC", "off");
        let mut parser = EnvParser::new();
        let result = parser.get_bool("TEST_SRC", true);
        assert_eq!(result.source, ConfigSource::Environment);
        assert_eq!(result.env_var.as_deref(), Some("PROGERR_TEST_SRC"));

        cleanup_env(&vars);
    }

    mod proptest_env_parsing {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_parse_bool_valid_only(s in "[a-zA-Z0-9_-]{0,20}") {
                let valid_true = ["1", "true", "yes", "on"];
                let valid_false = ["0", "false", "no", "off", ""];
                let is_valid = valid_true.iter().any(|v| s.eq_ignore_ascii_case(v))
                    || valid_false.iter().any(|v| s.eq_ignore_ascii_case(v));

                prop_assert_eq!(parse_bool(&s).is_some(), is_valid);
            }

            #[test]
            fn test_parse_log_level_valid_only(s in "[a-zA-Z]{0,10}") {
                let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
                let is_valid = valid_levels.iter().any(|v| s.eq_ignore_ascii_case(v));
                prop_assert_eq!(parse_log_level(&s).is_some(), is_valid);
            }

            #[test]
            fn test_parse_string_list_separators(
                items in prop::collection::vec("[a-zA-Z0-9]+", 0..10)
            ) {
                let input = items.join(",");
                prop_assert_eq!(parse_string_list(&input), items);
            }

            #[test]
            fn test_env_parser_get_bool(value in "[a-zA-Z0-9_-]{0,20}") {
                let _guard = env_test_lock();
                let var = "PROGERR_PROPTEST_BOOL";
                cleanup_env(&[var]);

                set_env(var, &value);
                let mut parser = EnvParser::new();
                let result = parser.get_bool("PROPTEST_BOOL", false);
                prop_assert_eq!(result.value, parse_bool(&value).unwrap_or(false));
                prop_assert_eq!(parser.has_errors(), parse_bool(&value).is_none());

                cleanup_env(&[var]);
            }
        }
    }
}
