//! Whole-state handler.

use axum::{extract::State, Json};
use tracing::debug;

use choreboard_models::RootDocument;

use crate::error::Result;
use crate::state::AppState;

/// GET /api/state - Returns the entire document.
pub async fn get_state(State(state): State<AppState>) -> Result<Json<RootDocument>> {
    debug!("Fetching current state");
    Ok(Json(state.document().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use choreboard_persistence::MemoryDocumentStore;

    #[tokio::test]
    async fn test_get_state_returns_stored_document() {
        let mut doc = RootDocument::seed();
        doc.current_week.prize = "Board games".to_string();
        let state = AppState::new(
            ApiConfig::default(),
            MemoryDocumentStore::with_document(doc.clone()),
        );

        let Json(returned) = get_state(State(state)).await.unwrap();
        assert_eq!(returned, doc);
    }
}
