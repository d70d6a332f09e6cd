//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Invalid value for {var}: '{value}'")]
    Env { var: &'static str, value: String },

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

/// Export `KEY=value` lines from the nearest `.env` file into the process
/// environment. Variables that are already set keep their value.
///
/// Returns the file that was read, or `None` when there is none.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load configuration from an optional TOML file, overlay the environment,
/// and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto `config`.
///
/// `lookup` abstracts the environment so callers (and tests) can supply
/// their own source.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        config.database.url = Some(url);
    }
    if let Some(host) = lookup("DB_HOST") {
        config.database.host = host;
    }
    if let Some(port) = lookup("DB_PORT") {
        config.database.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Env { var: "DB_PORT", value: port.clone() })?;
    }
    if let Some(user) = lookup("DB_USER") {
        config.database.user = user;
    }
    if let Some(password) = lookup("DB_PASS") {
        config.database.password = password;
    }
    if let Some(name) = lookup("DB_NAME") {
        config.database.name = name;
    }
    if let Some(bind) = lookup("REGISTRY_BIND_ADDRESS") {
        config.listener.bind_address = bind;
    }
    Ok(())
}
