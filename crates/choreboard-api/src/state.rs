//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use choreboard_core::Mutation;
use choreboard_models::RootDocument;
use choreboard_persistence::DocumentStore;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Application state shared across all handlers.
///
/// All access to the store goes through a single lock, so each
/// read-modify-write cycle completes before the next one starts and no
/// update is lost to a concurrent request. Other processes writing the same
/// data file are not coordinated with.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    store: Arc<dyn DocumentStore>,
    writer: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(config: ApiConfig, store: impl DocumentStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the current document.
    pub async fn document(&self) -> Result<RootDocument> {
        let _guard = self.writer.lock().await;
        self.with_store(|store| Ok(store.load()?)).await
    }

    /// Validates and applies a mutation, persists the result and returns it.
    ///
    /// Nothing is written if validation, loading or saving fails.
    pub async fn apply(&self, mutation: Mutation) -> Result<RootDocument> {
        mutation.validate()?;
        info!(operation = mutation.name(), payload = ?mutation, "Applying mutation");

        let _guard = self.writer.lock().await;
        self.with_store(move |store| {
            let updated = mutation.apply(store.load()?);
            if let Err(e) = store.save(&updated) {
                warn!(error = %e, "Failed to save document");
                return Err(e.into());
            }
            Ok(updated)
        })
        .await
    }

    /// Runs store I/O on the blocking thread pool.
    async fn with_store<F>(&self, f: F) -> Result<RootDocument>
    where
        F: FnOnce(&dyn DocumentStore) -> Result<RootDocument> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ApiError::Internal(format!("store task failed: {}", e)))?
    }
}
