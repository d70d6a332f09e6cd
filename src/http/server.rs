//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all API handlers
//! - Wire up middleware (tracing, request ID, limits, timeout, CORS)
//! - Bind server to listener
//! - Graceful shutdown when the `Shutdown` coordinator fires

use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    Router,
};
use sqlx::AnyPool;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::api_routes;
use crate::config::AppConfig;
use crate::http::request::{request_id_of, MakeRequestUuidV4};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

/// HTTP server for the registry API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `pool` with the given configuration.
    pub fn new(config: AppConfig, pool: AnyPool) -> Self {
        let state = AppState { pool };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id_of(request),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            // Inside the body limit: CORS needs a `Default` response body.
            .layer(cors_layer(&config.security.cors_origins))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        api_routes(state).layer(middleware)
    }

    /// Get the router (for testing).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown requested");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Any origin when none are configured, otherwise the configured list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
