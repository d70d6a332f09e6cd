//! API error type and its HTTP mapping.
//!
//! Every failure leaves the service as `{ "message": "..." }` with a status
//! code. Store errors are logged in full and replaced by a fixed message per
//! operation, so driver details never reach the client.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::MessageResponse;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input was rejected.
    #[error("{0}")]
    BadRequest(String),

    /// The referenced row does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// The store failed; `message` is what the client sees.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }

        let status = self.status();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Attach the client-facing message to a store error.
pub trait DbResultExt<T> {
    fn db_context(self, message: &'static str) -> ApiResult<T>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn db_context(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::Database { message, source })
    }
}
