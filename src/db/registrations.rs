//! Registration rows: the link between a student and an optional club.

use serde::Serialize;
use sqlx::AnyConnection;

use super::inserted_id;

/// One line of the registration overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RegistrationListing {
    pub id: i64,
    pub fname: String,
    pub studid: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
    pub club_name: String,
}

pub async fn insert(
    conn: &mut AnyConnection,
    student_id: i64,
    club_id: Option<i64>,
    consent: bool,
) -> Result<i64, sqlx::Error> {
    let result =
        sqlx::query("INSERT INTO registrations (student_id, club_id, consent) VALUES (?, ?, ?)")
            .bind(student_id)
            .bind(club_id)
            .bind(i32::from(consent))
            .execute(&mut *conn)
            .await?;

    inserted_id(conn, &result).await
}

/// Registrations joined to their student, with the club name or
/// "Not Assigned". Students without a registration do not appear.
pub async fn list(conn: &mut AnyConnection) -> Result<Vec<RegistrationListing>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationListing>(
        "SELECT r.id, s.fname, s.studid, s.grlev, s.maill, s.phno, \
                COALESCE(c.club_name, 'Not Assigned') AS club_name \
         FROM registrations r \
         JOIN students s ON r.student_id = s.id \
         LEFT JOIN clubs c ON r.club_id = c.id \
         ORDER BY r.id",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Owning student of a registration, if the registration exists.
pub async fn student_id_of(
    conn: &mut AnyConnection,
    registration_id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT student_id FROM registrations WHERE id = ?")
        .bind(registration_id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn set_club(
    conn: &mut AnyConnection,
    registration_id: i64,
    club_id: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE registrations SET club_id = ? WHERE id = ?")
        .bind(club_id)
        .bind(registration_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// Delete only the registration row; the student is kept.
pub async fn delete(conn: &mut AnyConnection, registration_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM registrations WHERE id = ?")
        .bind(registration_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}
