use axum::{routing::get, Json, Router};
use serde::Serialize;

use intake_core::types::{format_timestamp, Timestamp};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    /// Current server time, ISO-8601.
    pub time: String,
}

/// GET /status -- always succeeds, no side effects.
async fn status() -> Json<StatusResponse> {
    let now: Timestamp = chrono::Utc::now();
    Json(StatusResponse {
        message: "Server is running",
        time: format_timestamp(&now),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(status))
}
