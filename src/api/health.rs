use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// `GET /health`: 200 while the store answers, 503 otherwise.
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let database_up = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check query failed");
            false
        }
    };

    let (code, status, database) = if database_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    (
        code,
        Json(HealthStatus {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
