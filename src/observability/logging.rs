//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Pick the filter from `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via config and environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("club_registry={level},tower_http={level},sqlx=warn")
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}
