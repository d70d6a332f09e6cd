//! Metrics collection and exposition.
//!
//! # Metrics
//! - `registry_http_requests_total` (counter): requests by method, route, status
//! - `registry_http_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed exporter
//!   the calls are no-ops
//! - Routes are labelled by their template (`/students/{id}`), not the raw
//!   path, to keep label cardinality bounded

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record a finished request.
pub fn record_request(method: &str, route: &str, status: u16, start_time: Instant) {
    let elapsed = start_time.elapsed().as_secs_f64();

    metrics::counter!(
        "registry_http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "registry_http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(elapsed);
}

/// Middleware recording count and latency of every routed request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, &route, response.status().as_u16(), start_time);
    response
}
