//! Week lifecycle handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use choreboard_core::{Mutation, ResetWeekRequest};
use choreboard_models::RootDocument;

use crate::error::Result;
use crate::state::AppState;

/// POST /api/reset_week - Start a new week with a new prize.
pub async fn reset_week(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ResetWeekRequest>, JsonRejection>,
) -> Result<Json<RootDocument>> {
    let Json(req) = payload?;
    Ok(Json(state.apply(Mutation::ResetWeek(req)).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use choreboard_models::{AssignedChore, CompletedLogEntry};
    use choreboard_persistence::MemoryDocumentStore;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_reset_week() {
        let mut doc = RootDocument::seed();
        let mut assigned = AssignedChore::new(1, 1);
        assigned.completed = true;
        doc.current_week.assigned_chores.push(assigned);
        doc.current_week
            .completed_log
            .push(CompletedLogEntry::new(json!(1), 1, 1, Value::Null));
        let state = AppState::new(
            ApiConfig::default(),
            MemoryDocumentStore::with_document(doc),
        );

        let req = ResetWeekRequest {
            prize: "Sleep in on Sunday".to_string(),
        };
        let Json(doc) = reset_week(State(state), Ok(Json(req))).await.unwrap();

        assert_eq!(doc.current_week.prize, "Sleep in on Sunday");
        assert!(doc.current_week.completed_log.is_empty());
        assert_eq!(doc.current_week.assigned_chores, vec![AssignedChore::new(1, 1)]);
    }
}
