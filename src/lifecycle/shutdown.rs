//! Stop signal for the registry's HTTP server.
//!
//! `startup::run` forwards Ctrl+C/SIGTERM into a [`Shutdown`]; integration
//! tests trigger one directly to stop a server bound to an ephemeral port.
//! Either way `HttpServer::run` stops accepting, drains in-flight requests
//! and returns, after which the database pool is closed.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::lifecycle::signals::shutdown_signal;

/// One-shot "stop serving" broadcast. Clones share the same channel.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. Returns how many were listening.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Trigger once the process receives a termination signal.
    pub fn trigger_on_signal(&self) -> JoinHandle<()> {
        let shutdown = self.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            let servers = shutdown.trigger();
            tracing::info!(servers, "Stopping HTTP server");
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
