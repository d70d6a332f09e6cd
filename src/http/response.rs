//! Response bodies shared by the API handlers.

use serde::Serialize;

/// `{ "message": ... }`, the body of every acknowledgement and error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement of an insert, carrying the generated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}
