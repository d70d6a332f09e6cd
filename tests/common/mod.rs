//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tower::ServiceExt;

use club_registry::config::AppConfig;
use club_registry::HttpServer;

/// SQLite rendition of `schema.sql`.
const SCHEMA: &[&str] = &[
    "CREATE TABLE clubs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        club_name TEXT NOT NULL
    )",
    "CREATE TABLE students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        fname TEXT NOT NULL,
        studid TEXT NOT NULL,
        grlev TEXT NOT NULL,
        maill TEXT NOT NULL,
        phno TEXT NOT NULL
    )",
    "CREATE TABLE registrations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
        club_id INTEGER NULL REFERENCES clubs(id) ON DELETE SET NULL,
        consent INTEGER NOT NULL DEFAULT 0
    )",
];

/// Fresh in-memory database with the registry schema.
///
/// A single connection that never expires keeps the in-memory database
/// alive for the lifetime of the pool.
pub async fn test_pool() -> AnyPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }
    pool
}

/// Router wired exactly like the production server, over `pool`.
pub fn test_app(pool: AnyPool) -> Router {
    HttpServer::new(AppConfig::default(), pool).router()
}

pub async fn setup() -> (Router, AnyPool) {
    let pool = test_pool().await;
    (test_app(pool.clone()), pool)
}

/// Send one request through the router and decode the JSON answer.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Create a club and return its id.
pub async fn create_club(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/clubs", serde_json::json!({ "club_name": name })).await;
    assert_eq!(status, StatusCode::OK, "club creation failed: {body}");
    body["id"].as_i64().unwrap()
}

/// Register a student with a club through `POST /students`.
pub async fn register_student(app: &Router, studid: &str, fname: &str, club_id: i64) {
    let (status, body) = post(
        app,
        "/students",
        serde_json::json!({
            "fname": fname,
            "studid": studid,
            "grlev": "10",
            "maill": format!("{}@school.test", studid.to_lowercase()),
            "phno": "555-0100",
            "club_id": club_id,
            "consent": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "student registration failed: {body}");
}

pub async fn count(pool: &AnyPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
