use core::str::FromStr;

use thiserror::Error;

/// Filter directive env var; `RUST_LOG` is consulted when it is unset.
pub const LOG_FILTER_VAR: &str = "CATALOG_LOG";
/// Output format env var: `json`, `pretty` or `compact`.
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log format '{0}' (expected json, pretty or compact)")]
    UnsupportedLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::UnsupportedLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,catalog_application=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let filter = lookup(LOG_FILTER_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn catalog_log_takes_precedence_over_rust_log() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("CATALOG_LOG", "debug"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let config = ObservabilityConfig::from_lookup(lookup(&[("RUST_LOG", "warn")])).unwrap();
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn parses_format_case_insensitively() {
        let vars = [("CATALOG_LOG_FORMAT", " Pretty ")];
        let config = ObservabilityConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    }

    #[test]
    fn rejects_unknown_format() {
        let err =
            ObservabilityConfig::from_lookup(lookup(&[("CATALOG_LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedLogFormat("xml".to_string()));
    }
}
