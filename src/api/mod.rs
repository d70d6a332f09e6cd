//! Registry API routes.
//!
//! | Method | Path                         | Handler                                          |
//! |--------|------------------------------|--------------------------------------------------|
//! | GET    | /health                      | [`health::get_health`]                           |
//! | POST   | /students                    | [`students::create_student`]                     |
//! | GET    | /students                    | [`students::list_students`]                      |
//! | GET    | /students/{id}               | [`students::get_student`] (external `studid`)    |
//! | PUT    | /students/{id}               | [`students::update_student`] (internal id)       |
//! | POST   | /clubs                       | [`clubs::create_club`]                           |
//! | GET    | /clubs                       | [`clubs::list_clubs`]                            |
//! | POST   | /registrations               | [`registrations::create_registration`]           |
//! | GET    | /registrations               | [`registrations::list_registrations`]            |
//! | PUT    | /registrations/{id}          | [`registrations::update_registration`]           |
//! | DELETE | /registrations/{id}          | [`registrations::delete_registration_with_student`] |
//! | DELETE | /registrations/{id}/record   | [`registrations::delete_registration`]           |
//!
//! `DELETE /registrations/{id}` removes the owning student (and, through the
//! store's cascade, the registration). Removing only the registration row
//! lives under `/record`.

pub mod clubs;
pub mod flag;
pub mod health;
pub mod registrations;
pub mod students;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::http::server::AppState;
use crate::observability::metrics::track_metrics;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::get_health))
        .route(
            "/students",
            post(students::create_student).get(students::list_students),
        )
        .route(
            "/students/{id}",
            get(students::get_student).put(students::update_student),
        )
        .route("/clubs", post(clubs::create_club).get(clubs::list_clubs))
        .route(
            "/registrations",
            post(registrations::create_registration).get(registrations::list_registrations),
        )
        .route(
            "/registrations/{id}",
            put(registrations::update_registration)
                .delete(registrations::delete_registration_with_student),
        )
        .route(
            "/registrations/{id}/record",
            delete(registrations::delete_registration),
        )
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}
