//! Club Registry Library
//!
//! JSON API over students, clubs and the registrations linking them.

pub mod api;
pub mod config;
pub mod db;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
