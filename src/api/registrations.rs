//! Registration endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::flag::deserialize_flag;
use crate::db::{registrations, students, RegistrationListing, StudentFields};
use crate::http::error::{ApiError, ApiResult, DbResultExt};
use crate::http::extract::{ApiJson, ApiPath};
use crate::http::response::{CreatedResponse, MessageResponse};
use crate::http::server::AppState;

/// Body of `POST /registrations`. Neither id is checked for existence here;
/// the store's foreign keys decide.
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    pub student_id: i64,
    #[serde(default)]
    pub club_id: Option<i64>,
    /// Any truthy JSON value; stored as 0 or 1.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub consent: bool,
}

/// Body of `PUT /registrations/{id}`: the owning student's fields plus the
/// club. A null `club_id` clears the assignment.
#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationRequest {
    pub fname: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
    #[serde(default)]
    pub club_id: Option<i64>,
}

/// `POST /registrations`
pub async fn create_registration(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateRegistrationRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    const FAILED: &str = "Failed to create registration.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let id = registrations::insert(&mut conn, body.student_id, body.club_id, body.consent)
        .await
        .db_context(FAILED)?;

    tracing::info!(id, student_id = body.student_id, club_id = ?body.club_id, "Registration created");
    Ok(Json(CreatedResponse {
        message: "Registration successful",
        id,
    }))
}

/// `GET /registrations`
pub async fn list_registrations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RegistrationListing>>> {
    const FAILED: &str = "Failed to retrieve registrations.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let rows = registrations::list(&mut conn).await.db_context(FAILED)?;
    Ok(Json(rows))
}

/// `PUT /registrations/{id}`
///
/// Student fields and club change together or not at all.
pub async fn update_registration(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateRegistrationRequest>,
) -> ApiResult<Json<MessageResponse>> {
    const FAILED: &str = "Failed to update registration.";

    let fields = StudentFields {
        fname: &body.fname,
        grlev: &body.grlev,
        maill: &body.maill,
        phno: &body.phno,
    };

    let mut tx = state.pool.begin().await.db_context(FAILED)?;
    let students_updated = students::update_by_registration(&mut tx, id, fields)
        .await
        .db_context(FAILED)?;
    let registrations_updated = registrations::set_club(&mut tx, id, body.club_id)
        .await
        .db_context(FAILED)?;
    tx.commit().await.db_context(FAILED)?;

    tracing::debug!(
        id,
        students_updated,
        registrations_updated,
        "Registration update applied"
    );
    Ok(Json(MessageResponse::new("Registration updated successfully")))
}

/// `DELETE /registrations/{id}`
///
/// Removes the student owning the registration; the store cascades the
/// registration itself.
pub async fn delete_registration_with_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    const FAILED: &str = "Failed to delete student and registration.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;

    let student_id = registrations::student_id_of(&mut conn, id)
        .await
        .db_context(FAILED)?
        .ok_or(ApiError::NotFound("Registration not found."))?;

    let deleted = students::delete(&mut conn, student_id)
        .await
        .db_context(FAILED)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Student not found."));
    }

    tracing::info!(registration_id = id, student_id, "Student and registration deleted");
    Ok(Json(MessageResponse::new(
        "Student and associated registration deleted successfully",
    )))
}

/// `DELETE /registrations/{id}/record`
///
/// Removes only the registration row.
pub async fn delete_registration(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    const FAILED: &str = "Failed to delete registration.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let deleted = registrations::delete(&mut conn, id)
        .await
        .db_context(FAILED)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Registration not found."));
    }

    tracing::info!(registration_id = id, "Registration deleted");
    Ok(Json(MessageResponse::new("Registration deleted")))
}
