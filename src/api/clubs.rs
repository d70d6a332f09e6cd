//! Club endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::db::{clubs, Club};
use crate::http::error::{ApiResult, DbResultExt};
use crate::http::extract::ApiJson;
use crate::http::response::CreatedResponse;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateClubRequest {
    pub club_name: String,
}

/// `POST /clubs`
pub async fn create_club(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateClubRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    const FAILED: &str = "Failed to add club.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let id = clubs::insert(&mut conn, &body.club_name)
        .await
        .db_context(FAILED)?;

    tracing::info!(id, club_name = %body.club_name, "Club added");
    Ok(Json(CreatedResponse {
        message: "Club added",
        id,
    }))
}

/// `GET /clubs`
pub async fn list_clubs(State(state): State<AppState>) -> ApiResult<Json<Vec<Club>>> {
    const FAILED: &str = "Failed to retrieve clubs.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let rows = clubs::list(&mut conn).await.db_context(FAILED)?;
    Ok(Json(rows))
}
