//! Configuration validation.
//!
//! Returns every problem found, not just the first. Runs before the
//! configuration is handed to any subsystem.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.transport.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
