//! Student endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::api::flag::deserialize_flag;
use crate::db::{registrations, students, Student, StudentDetail, StudentFields};
use crate::http::error::{ApiError, ApiResult, DbResultExt};
use crate::http::extract::{ApiJson, ApiPath};
use crate::http::response::MessageResponse;
use crate::http::server::AppState;

const INVALID_CLUB: &str = "Invalid club selection.";

/// Body of `POST /students`: a student plus its first registration.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub fname: String,
    pub studid: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
    /// Club id as a JSON integer or a string holding one.
    #[serde(default)]
    pub club_id: Option<Value>,
    /// Any truthy JSON value; stored as 0 or 1.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub consent: bool,
}

impl CreateStudentRequest {
    fn fields(&self) -> StudentFields<'_> {
        StudentFields {
            fname: &self.fname,
            grlev: &self.grlev,
            maill: &self.maill,
            phno: &self.phno,
        }
    }
}

/// Body of `PUT /students/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub fname: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
}

impl UpdateStudentRequest {
    fn fields(&self) -> StudentFields<'_> {
        StudentFields {
            fname: &self.fname,
            grlev: &self.grlev,
            maill: &self.maill,
            phno: &self.phno,
        }
    }
}

/// Validate the club selection of a new student.
///
/// Accepts a positive integer given as a JSON number or numeric string.
pub fn club_selection(value: Option<&Value>) -> ApiResult<i64> {
    let id = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    id.filter(|id| *id > 0)
        .ok_or_else(|| ApiError::BadRequest(INVALID_CLUB.to_string()))
}

/// `POST /students`
///
/// Inserts the student and its registration in one transaction.
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    const FAILED: &str = "Failed to register student.";

    let club_id = club_selection(body.club_id.as_ref())?;

    let mut tx = state.pool.begin().await.db_context(FAILED)?;

    let student_id = students::insert(&mut tx, &body.studid, body.fields())
        .await
        .db_context(FAILED)?;
    let registration_id = registrations::insert(&mut tx, student_id, Some(club_id), body.consent)
        .await
        .db_context(FAILED)?;

    tx.commit().await.db_context(FAILED)?;

    tracing::info!(
        student_id,
        registration_id,
        club_id,
        studid = %body.studid,
        "Student registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student registered successfully!")),
    ))
}

/// `GET /students`
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    const FAILED: &str = "Failed to retrieve students.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let rows = students::list(&mut conn).await.db_context(FAILED)?;
    Ok(Json(rows))
}

/// `GET /students/{studid}`
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(studid): ApiPath<String>,
) -> ApiResult<Json<StudentDetail>> {
    const FAILED: &str = "Failed to retrieve student details.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    students::find_by_studid(&mut conn, &studid)
        .await
        .db_context(FAILED)?
        .map(Json)
        .ok_or(ApiError::NotFound("Student not found."))
}

/// `PUT /students/{id}`
///
/// Reports success even when no student has this id.
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateStudentRequest>,
) -> ApiResult<Json<MessageResponse>> {
    const FAILED: &str = "Failed to update student.";

    let mut conn = state.pool.acquire().await.db_context(FAILED)?;
    let affected = students::update(&mut conn, id, body.fields())
        .await
        .db_context(FAILED)?;

    tracing::debug!(id, affected, "Student update applied");
    Ok(Json(MessageResponse::new("Student updated")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_club_selection_accepts_numbers_and_numeric_strings() {
        assert_eq!(club_selection(Some(&json!(3))).unwrap(), 3);
        assert_eq!(club_selection(Some(&json!("12"))).unwrap(), 12);
        assert_eq!(club_selection(Some(&json!(" 7 "))).unwrap(), 7);
    }

    #[test]
    fn test_club_selection_rejects_invalid() {
        for value in [
            json!("abc"),
            json!(""),
            json!(0),
            json!(-4),
            json!(1.5),
            json!(true),
            json!(null),
            json!([1]),
        ] {
            let err = club_selection(Some(&value)).unwrap_err();
            assert_eq!(err.to_string(), INVALID_CLUB, "value {value} should be rejected");
        }
        assert!(club_selection(None).is_err());
    }

    #[test]
    fn test_create_request_defaults() {
        let body: CreateStudentRequest = serde_json::from_value(json!({
            "fname": "A",
            "studid": "S1",
            "grlev": "10",
            "maill": "a@x.com",
            "phno": "123"
        }))
        .unwrap();

        assert!(body.club_id.is_none());
        assert!(!body.consent);
    }

    #[test]
    fn test_consent_accepts_loose_values() {
        let body = |consent: Value| -> CreateStudentRequest {
            serde_json::from_value(json!({
                "fname": "A",
                "studid": "S1",
                "grlev": "10",
                "maill": "a@x.com",
                "phno": "123",
                "club_id": 1,
                "consent": consent
            }))
            .unwrap()
        };

        assert!(body(json!(1)).consent);
        assert!(body(json!("on")).consent);
        assert!(body(json!("true")).consent);
        assert!(!body(json!(0)).consent);
        assert!(!body(json!("")).consent);
        assert!(!body(json!(null)).consent);
    }
}
