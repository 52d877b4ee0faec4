//! Handler for the submission intake endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use intake_core::validation::{validate_submission, SubmissionInput};

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

pub const INVALID_BODY_MESSAGE: &str = "invalid JSON body";
pub const SUBMISSION_SAVED_MESSAGE: &str = "Submission saved.";

// ---------------------------------------------------------------------------
// POST /submit
// ---------------------------------------------------------------------------

/// Validate the body, then append it to both stores and echo the record.
///
/// Nothing touches the filesystem until validation has passed.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected submission body");
        AppError::BadRequest(INVALID_BODY_MESSAGE.into())
    })?;

    let input = SubmissionInput::from_json(&body);
    // Test data only; revisit before accepting real PII.
    tracing::info!(name = ?input.name, email = ?input.email, "Received submission");

    let submission = validate_submission(input)?;
    let record = state.store.save(submission).await?;

    tracing::info!(timestamp = %record.timestamp, "Submission stored");
    Ok(Json(SuccessResponse::new(SUBMISSION_SAVED_MESSAGE, record)))
}
