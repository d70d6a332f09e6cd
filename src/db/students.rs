//! Student rows.

use serde::Serialize;
use sqlx::AnyConnection;

use super::inserted_id;

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub fname: String,
    pub studid: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
}

/// A student joined with (at most) one of its registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StudentDetail {
    pub id: i64,
    pub fname: String,
    pub studid: String,
    pub grlev: String,
    pub maill: String,
    pub phno: String,
    pub registration_id: Option<i64>,
    pub club_id: Option<i64>,
}

/// Mutable identity fields shared by create and update.
#[derive(Debug, Clone, Copy)]
pub struct StudentFields<'a> {
    pub fname: &'a str,
    pub grlev: &'a str,
    pub maill: &'a str,
    pub phno: &'a str,
}

pub async fn insert(
    conn: &mut AnyConnection,
    studid: &str,
    fields: StudentFields<'_>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO students (fname, studid, grlev, maill, phno) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(fields.fname)
    .bind(studid)
    .bind(fields.grlev)
    .bind(fields.maill)
    .bind(fields.phno)
    .execute(&mut *conn)
    .await?;

    inserted_id(conn, &result).await
}

pub async fn list(conn: &mut AnyConnection) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT id, fname, studid, grlev, maill, phno FROM students ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Look a student up by external id.
///
/// Only the first joined row is returned when the external id is shared or
/// the student has several registrations.
pub async fn find_by_studid(
    conn: &mut AnyConnection,
    studid: &str,
) -> Result<Option<StudentDetail>, sqlx::Error> {
    sqlx::query_as::<_, StudentDetail>(
        "SELECT s.id, s.fname, s.studid, s.grlev, s.maill, s.phno, \
                r.id AS registration_id, r.club_id \
         FROM students s \
         LEFT JOIN registrations r ON s.id = r.student_id \
         WHERE s.studid = ? \
         ORDER BY s.id, r.id \
         LIMIT 1",
    )
    .bind(studid)
    .fetch_optional(&mut *conn)
    .await
}

/// Overwrite a student's identity fields. Returns the affected row count,
/// which is zero for an unknown id.
pub async fn update(
    conn: &mut AnyConnection,
    id: i64,
    fields: StudentFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE students SET fname = ?, grlev = ?, maill = ?, phno = ? WHERE id = ?")
        .bind(fields.fname)
        .bind(fields.grlev)
        .bind(fields.maill)
        .bind(fields.phno)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// Overwrite the identity fields of the student owning `registration_id`.
pub async fn update_by_registration(
    conn: &mut AnyConnection,
    registration_id: i64,
    fields: StudentFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE students SET fname = ?, grlev = ?, maill = ?, phno = ? \
         WHERE id = (SELECT student_id FROM registrations WHERE id = ?)",
    )
    .bind(fields.fname)
    .bind(fields.grlev)
    .bind(fields.maill)
    .bind(fields.phno)
    .bind(registration_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a student. The store cascades to its registrations.
pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}
