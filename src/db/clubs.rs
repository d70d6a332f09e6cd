//! Club rows.

use serde::Serialize;
use sqlx::AnyConnection;

use super::inserted_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Club {
    pub id: i64,
    pub club_name: String,
}

pub async fn insert(conn: &mut AnyConnection, club_name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO clubs (club_name) VALUES (?)")
        .bind(club_name)
        .execute(&mut *conn)
        .await?;

    inserted_id(conn, &result).await
}

pub async fn list(conn: &mut AnyConnection) -> Result<Vec<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>("SELECT id, club_name FROM clubs ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}
