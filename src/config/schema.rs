//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the registry.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the registry service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Relational store connection settings.
    pub database: DatabaseConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Request hardening (body size, CORS).
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL. Takes precedence over the individual fields.
    pub url: Option<String>,

    /// Database server host.
    pub host: String,

    /// Database server port.
    pub port: u16,

    /// User name.
    pub user: String,

    /// Password (may be empty).
    pub password: String,

    /// Database (schema) name.
    pub name: String,

    /// Maximum pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "club_registry".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Connection URL handed to the driver.
    ///
    /// When no explicit `url` is configured a `mysql://` URL is assembled from
    /// the individual fields, percent-encoding the credentials.
    pub fn connection_url(&self) -> Result<String, url::ParseError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let mut url = Url::parse(&format!("mysql://{}:{}", self.host, self.port))?;
        url.set_username(&self.user)
            .map_err(|_| url::ParseError::EmptyHost)?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| url::ParseError::EmptyHost)?;
        }
        url.set_path(&self.name);
        Ok(url.to_string())
    }

    /// Connection URL with the password masked, for logging.
    pub fn redacted_url(&self) -> String {
        match self.connection_url().ok().and_then(|u| Url::parse(&u).ok()) {
            Some(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("****"));
                }
                url.to_string()
            }
            None => "<invalid database url>".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9100".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MB
            cors_origins: Vec::new(),
        }
    }
}
