use std::sync::Arc;

use intake_core::storage::SubmissionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file submission store.
    pub store: Arc<SubmissionStore>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: Arc::new(SubmissionStore::new(config.storage())),
        }
    }
}
