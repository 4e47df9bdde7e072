//! Chore handlers: logging, weekly completion, catalog changes.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use choreboard_core::{AddChoreRequest, DeleteChoreRequest, Mutation, UpdateWeeklyChoreRequest};
use choreboard_models::{CompletedLogEntry, RootDocument};

use crate::error::Result;
use crate::state::AppState;

/// POST /api/log_chore - Append an entry to the completion log.
pub async fn log_chore(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CompletedLogEntry>, JsonRejection>,
) -> Result<Json<RootDocument>> {
    let Json(entry) = payload?;
    Ok(Json(state.apply(Mutation::LogChore(entry)).await?))
}

/// POST /api/update_weekly_chore - Mark a weekly assignment done or not done.
pub async fn update_weekly_chore(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateWeeklyChoreRequest>, JsonRejection>,
) -> Result<Json<RootDocument>> {
    let Json(req) = payload?;
    Ok(Json(state.apply(Mutation::UpdateWeeklyChore(req)).await?))
}

/// POST /api/add_chore - Add a chore to the catalog.
pub async fn add_chore(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddChoreRequest>, JsonRejection>,
) -> Result<Json<RootDocument>> {
    let Json(req) = payload?;
    Ok(Json(state.apply(Mutation::AddChore(req)).await?))
}

/// POST /api/delete_chore - Remove a chore and everything referencing it.
pub async fn delete_chore(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DeleteChoreRequest>, JsonRejection>,
) -> Result<Json<RootDocument>> {
    let Json(req) = payload?;
    Ok(Json(state.apply(Mutation::DeleteChore(req)).await?))
}
