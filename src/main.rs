//! Club Registry server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server (request id, trace, limits, CORS)
//!                        │
//!                        ▼
//!                    api::{students, clubs, registrations}
//!                        │   typed JSON schemas, validation
//!                        ▼
//!                    db::{students, clubs, registrations}
//!                        │   parameterized SQL, transactions
//!                        ▼
//!                    AnyPool ─────────────▶ MySQL
//! ```
//!
//! Configuration comes from an optional TOML file overlaid with the
//! `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME` environment, which
//! may itself come from a `.env` file.

use std::path::PathBuf;

use clap::Parser;

use club_registry::config::{load_config, load_dotenv};
use club_registry::lifecycle::startup;
use club_registry::observability::logging;

#[derive(Parser)]
#[command(name = "club-registry")]
#[command(about = "Student club registration API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_file = load_dotenv()?;
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("club-registry v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = env_file {
        tracing::info!(path = %path.display(), "Loaded environment file");
    }

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
