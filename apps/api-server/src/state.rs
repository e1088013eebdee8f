//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use masterblog_core::ports::PostRepository;
use masterblog_infra::{InMemoryPostStore, JsonFilePostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate store.
    pub fn new(storage_path: Option<&Path>) -> Self {
        let posts: Arc<dyn PostRepository> = match storage_path {
            Some(path) => {
                tracing::info!("Using JSON file post store at {}", path.display());
                Arc::new(JsonFilePostStore::new(path))
            }
            None => {
                tracing::warn!(
                    "STORAGE_PATH not set. Posts are held in memory and lost on restart."
                );
                Arc::new(InMemoryPostStore::new())
            }
        };

        Self { posts }
    }

    /// State around an existing store. Used by tests.
    pub fn with_store(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
