use axum::routing::post;
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(submission::submit))
}
