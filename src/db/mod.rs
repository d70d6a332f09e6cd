//! Relational store access.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig
//!     → connect() (install drivers, build AnyPool)
//!     → AppState (pool injected into every handler)
//!     → students.rs / clubs.rs / registrations.rs (one fn per statement)
//! ```
//!
//! # Design Decisions
//! - `sqlx::Any` so the same statements run on MySQL and SQLite
//! - Query functions take `&mut AnyConnection`, so a handler can run them on
//!   a pooled connection or inside a transaction without changes
//! - Statements use `?` placeholders, which both backends accept
//! - Generated keys are read on the inserting connection (see `inserted_id`)

pub mod clubs;
pub mod registrations;
pub mod students;

use sqlx::any::{AnyPoolOptions, AnyQueryResult};
use sqlx::{AnyConnection, AnyPool};

use crate::config::DatabaseConfig;

pub use clubs::Club;
pub use registrations::RegistrationListing;
pub use students::{Student, StudentDetail, StudentFields};

/// Errors raised while opening the pool.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid database url: {0}")]
    Url(#[from] url::ParseError),

    #[error("database connection failed: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Open a connection pool for the configured store.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, ConnectError> {
    sqlx::any::install_default_drivers();

    let url = config.connection_url()?;
    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&url)
        .await?;

    tracing::info!(
        database = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Generated key of the INSERT that produced `result` on `conn`.
///
/// MySQL reports the key with the result. The SQLite driver does not, so
/// the key is read back from the same connection.
pub(crate) async fn inserted_id(
    conn: &mut AnyConnection,
    result: &AnyQueryResult,
) -> Result<i64, sqlx::Error> {
    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    let statement = match conn.backend_name() {
        name if name.eq_ignore_ascii_case("sqlite") => "SELECT last_insert_rowid()",
        name if name.eq_ignore_ascii_case("mysql") => "SELECT CAST(LAST_INSERT_ID() AS SIGNED)",
        name => {
            return Err(sqlx::Error::Protocol(format!(
                "{name} driver did not report a generated id"
            )))
        }
    };

    sqlx::query_scalar::<_, i64>(statement)
        .fetch_one(&mut *conn)
        .await
}
