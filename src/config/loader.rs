//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Listening port (required).
pub const ENV_PORT: &str = "PORT";
/// Disable upstream certificate validation.
pub const ENV_SKIP_SSL_VALIDATION: &str = "SKIP_SSL_VALIDATION";
/// Reject unroutable requests instead of failing open.
pub const ENV_STRICT_FORWARDING: &str = "STRICT_FORWARDING";
/// Upstream timeout in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
/// Log filter fallback when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<ProxyConfig, ConfigError> {
    load_from(|name| std::env::var(name).ok())
}

/// Load and validate configuration using `lookup` to resolve variables.
pub fn load_from<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ProxyConfig::default();

    let port = lookup(ENV_PORT).ok_or(ConfigError::Missing(ENV_PORT))?;
    config.listener.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
        name: ENV_PORT,
        value: port.clone(),
    })?;

    // Unset or unparsable falls back to insecure.
    config.transport.skip_ssl_validation = lookup(ENV_SKIP_SSL_VALIDATION)
        .and_then(|v| parse_bool(&v))
        .unwrap_or(true);

    config.forwarding.strict = lookup(ENV_STRICT_FORWARDING)
        .and_then(|v| parse_bool(&v))
        .unwrap_or(false);

    if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
        let secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name: ENV_REQUEST_TIMEOUT_SECS,
            value: raw.clone(),
        })?;
        config.transport.request_timeout_secs = Some(secs);
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.trim().is_empty()) {
        config.observability.log_level = level;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a boolean the way Go's `strconv.ParseBool` does.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn parse_bool_accepts_go_grammar() {
        for v in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        for v in ["", "yes", "tRUE", "2", " true"] {
            assert_eq!(parse_bool(v), None, "{v}");
        }
    }

    #[test]
    fn port_is_required() {
        let err = load_from(env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_PORT)));
    }

    #[test]
    fn port_must_be_numeric() {
        let err = load_from(env(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: ENV_PORT, .. }));

        let err = load_from(env(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: ENV_PORT, .. }));
    }

    #[test]
    fn defaults_are_permissive() {
        let config = load_from(env(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert!(config.transport.skip_ssl_validation);
        assert_eq!(config.transport.request_timeout_secs, None);
        assert!(!config.forwarding.strict);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn unparsable_ssl_toggle_falls_back_to_insecure() {
        let config = load_from(env(&[("PORT", "1"), ("SKIP_SSL_VALIDATION", "nope")])).unwrap();
        assert!(config.transport.skip_ssl_validation);
    }

    #[test]
    fn ssl_validation_can_be_enabled() {
        let config = load_from(env(&[("PORT", "1"), ("SKIP_SSL_VALIDATION", "false")])).unwrap();
        assert!(!config.transport.skip_ssl_validation);
    }

    #[test]
    fn optional_settings_are_read() {
        let config = load_from(env(&[
            ("PORT", "9000"),
            ("STRICT_FORWARDING", "1"),
            ("REQUEST_TIMEOUT_SECS", "15"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert!(config.forwarding.strict);
        assert_eq!(config.transport.request_timeout_secs, Some(15));
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = load_from(env(&[("PORT", "9000"), ("REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
    }
}
