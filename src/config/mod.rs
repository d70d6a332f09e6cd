//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (DB_HOST, DB_PORT, DB_USER, DB_PASS, DB_NAME, ...;
//!       `.env` entries are exported first by load_dotenv)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_dotenv, ConfigError};
pub use schema::AppConfig;
pub use schema::DatabaseConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
