//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid, pool size > 0)
//! - Check that a usable database target is configured
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("database port must be non-zero")]
    DatabasePort,

    #[error("database name must not be empty")]
    DatabaseName,

    #[error("database max_connections must be at least 1")]
    PoolSize,

    #[error("request timeout must be at least 1 second")]
    RequestTimeout,

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    // An explicit URL carries its own target.
    if config.database.url.is_none() {
        if config.database.port == 0 {
            errors.push(ValidationError::DatabasePort);
        }
        if config.database.name.trim().is_empty() {
            errors.push(ValidationError::DatabaseName);
        }
    }

    if config.database.max_connections == 0 {
        errors.push(ValidationError::PoolSize);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
