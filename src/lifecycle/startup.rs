//! Startup orchestration.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::db::{self, ConnectError};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal errors while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ConnectError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connect, bind and serve until shutdown.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let pool = db::connect(&config.database).await?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let signals = shutdown.trigger_on_signal();
    let server = HttpServer::new(config, pool.clone());
    let served = server.run(listener, shutdown.subscribe()).await;
    signals.abort();
    served.map_err(StartupError::Serve)?;

    pool.close().await;
    Ok(())
}
