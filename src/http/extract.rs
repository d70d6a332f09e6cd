//! Extractors whose rejections answer in the API's `{ "message": ... }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::http::error::ApiError;

/// JSON body deserialized into a typed request schema.
///
/// Malformed JSON, a wrong content type, or a missing/mistyped field is
/// rejected with 400 before the handler runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; a non-numeric internal id is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
