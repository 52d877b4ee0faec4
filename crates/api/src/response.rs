//! Response envelope types shared by handlers and [`crate::error::AppError`].
//!
//! Submission responses carry a `status` discriminator (`"success"` or
//! `"error"`) next to a human-readable `message`.

use serde::Serialize;

/// `{ "status": "success", "message": ..., "data": T }`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}

/// `{ "status": "error", "message": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
