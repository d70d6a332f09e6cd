//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → extract.rs (typed JSON body / path parameters)
//!     → api handlers (crate::api)
//!     → response.rs / error.rs (JSON body, status code)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
