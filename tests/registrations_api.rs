//! Registration endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_listing_joins_student_and_club() {
    let (app, _pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    let (status, body) = common::get(&app, "/registrations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "fname": "Ada",
            "studid": "S1",
            "grlev": "10",
            "maill": "s1@school.test",
            "phno": "555-0100",
            "club_name": "Chess"
        }])
    );
}

#[tokio::test]
async fn test_unassigned_club_and_unregistered_student() {
    let (app, pool) = common::setup().await;

    sqlx::query(
        "INSERT INTO students (fname, studid, grlev, maill, phno) VALUES \
         ('Ada', 'S1', '10', 'ada@x.com', '1'), \
         ('Bob', 'S2', '11', 'bob@x.com', '2')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let (status, body) = common::post(
        &app,
        "/registrations",
        json!({ "student_id": 1, "club_id": null, "consent": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Registration successful", "id": 1 }));

    let (_, body) = common::get(&app, "/registrations").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["studid"], "S1");
    assert_eq!(rows[0]["club_name"], "Not Assigned");

    // Bob has no registration: absent here, present in the student list.
    let (_, students) = common::get(&app, "/students").await;
    let studids: Vec<&str> = students
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["studid"].as_str().unwrap())
        .collect();
    assert_eq!(studids, vec!["S1", "S2"]);
}

#[tokio::test]
async fn test_create_registration_for_unknown_student_fails() {
    let (app, pool) = common::setup().await;

    let (status, body) = common::post(
        &app,
        "/registrations",
        json!({ "student_id": 77, "club_id": null, "consent": false }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to create registration." }));
    assert_eq!(common::count(&pool, "registrations").await, 0);
}

#[tokio::test]
async fn test_update_registration_changes_student_and_club() {
    let (app, _pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    let debate = common::create_club(&app, "Debate").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    let (status, body) = common::put(
        &app,
        "/registrations/1",
        json!({
            "fname": "Ada L.",
            "grlev": "12",
            "maill": "ada@x.com",
            "phno": "42",
            "club_id": debate
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Registration updated successfully" }));

    let (_, body) = common::get(&app, "/registrations").await;
    assert_eq!(body[0]["fname"], "Ada L.");
    assert_eq!(body[0]["grlev"], "12");
    assert_eq!(body[0]["club_name"], "Debate");

    let (_, body) = common::get(&app, "/students/S1").await;
    assert_eq!(body["club_id"], debate);
}

#[tokio::test]
async fn test_update_registration_can_clear_club() {
    let (app, _pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    let (status, _) = common::put(
        &app,
        "/registrations/1",
        json!({ "fname": "Ada", "grlev": "10", "maill": "a@x.com", "phno": "1", "club_id": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, "/registrations").await;
    assert_eq!(body[0]["club_name"], "Not Assigned");
}

#[tokio::test]
async fn test_failed_club_update_keeps_student_fields() {
    let (app, _pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    // Club 99 does not exist: the second statement fails and the first is
    // rolled back with it.
    let (status, body) = common::put(
        &app,
        "/registrations/1",
        json!({ "fname": "Changed", "grlev": "12", "maill": "c@x.com", "phno": "0", "club_id": 99 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to update registration." }));

    let (_, body) = common::get(&app, "/students/S1").await;
    assert_eq!(body["fname"], "Ada");
    assert_eq!(body["club_id"], chess);
}

#[tokio::test]
async fn test_delete_removes_student_and_registration() {
    let (app, pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    let (status, body) = common::delete(&app, "/registrations/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Student and associated registration deleted successfully" })
    );

    assert_eq!(common::count(&pool, "students").await, 0);
    assert_eq!(common::count(&pool, "registrations").await, 0);

    let (status, _) = common::get(&app, "/students/S1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = common::delete(&app, "/registrations/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Registration not found." }));
}

#[tokio::test]
async fn test_delete_record_keeps_student() {
    let (app, pool) = common::setup().await;
    let chess = common::create_club(&app, "Chess").await;
    common::register_student(&app, "S1", "Ada", chess).await;

    let (status, body) = common::delete(&app, "/registrations/1/record").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Registration deleted" }));

    assert_eq!(common::count(&pool, "registrations").await, 0);
    assert_eq!(common::count(&pool, "students").await, 1);

    let (status, body) = common::get(&app, "/students/S1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["registration_id"].is_null());

    let (status, body) = common::delete(&app, "/registrations/1/record").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Registration not found." }));
}
