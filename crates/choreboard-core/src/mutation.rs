//! The mutations that can be applied to the root document.

use serde_json::Value;
use tracing::debug;

use choreboard_models::{
    AssignedChore, ChoreType, CompletedLogEntry, MasterChore, RootDocument,
};

use crate::error::{Result, ValidationError};
use crate::requests::{
    AddChoreRequest, DeleteChoreRequest, ResetWeekRequest, UpdateWeeklyChoreRequest,
};

/// A single change to the household state.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Append an entry to the completion log verbatim.
    LogChore(CompletedLogEntry),
    /// Tick or untick a weekly assignment and keep the log in step.
    UpdateWeeklyChore(UpdateWeeklyChoreRequest),
    /// Add a chore to the catalog, assigning it if weekly.
    AddChore(AddChoreRequest),
    /// Remove a chore and everything that references it.
    DeleteChore(DeleteChoreRequest),
    /// Start a new week with a new prize.
    ResetWeek(ResetWeekRequest),
}

impl Mutation {
    /// Returns the operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::LogChore(_) => "log_chore",
            Mutation::UpdateWeeklyChore(_) => "update_weekly_chore",
            Mutation::AddChore(_) => "add_chore",
            Mutation::DeleteChore(_) => "delete_chore",
            Mutation::ResetWeek(_) => "reset_week",
        }
    }

    /// Checks the request before anything is applied.
    pub fn validate(&self) -> Result<()> {
        if let Mutation::AddChore(req) = self {
            if req.name.trim().is_empty() {
                return Err(ValidationError::Blank { field: "name" });
            }
            if req.points < 0 {
                return Err(ValidationError::Negative {
                    field: "points",
                    value: req.points,
                });
            }
        }
        Ok(())
    }

    /// Applies the mutation, returning the updated document.
    pub fn apply(self, document: RootDocument) -> RootDocument {
        match self {
            Mutation::LogChore(entry) => log_chore(document, entry),
            Mutation::UpdateWeeklyChore(req) => update_weekly_chore(document, req),
            Mutation::AddChore(req) => add_chore(document, req),
            Mutation::DeleteChore(req) => delete_chore(document, req),
            Mutation::ResetWeek(req) => reset_week(document, req),
        }
    }
}

fn log_chore(mut document: RootDocument, entry: CompletedLogEntry) -> RootDocument {
    if document.chore(entry.chore_id).is_none() {
        debug!(chore_id = entry.chore_id, "Logging chore that is not in the catalog");
    }
    document.current_week.completed_log.push(entry);
    document
}

fn update_weekly_chore(mut document: RootDocument, req: UpdateWeeklyChoreRequest) -> RootDocument {
    let week = &mut document.current_week;

    match week
        .assigned_chores
        .iter_mut()
        .find(|a| a.matches(req.chore_id, req.user_id))
    {
        Some(assigned) => assigned.completed = req.completed,
        None => debug!(
            chore_id = req.chore_id,
            user_id = req.user_id,
            "No matching assignment, leaving assignments unchanged"
        ),
    }

    if req.completed {
        // One log entry per (chore, user) pair, whatever the logId.
        if !week.is_logged(req.chore_id, req.user_id) {
            let log_id = req.log_id.unwrap_or_else(|| Value::from(req.chore_id));
            let timestamp = req.timestamp.unwrap_or(Value::Null);
            week.completed_log.push(CompletedLogEntry::new(
                log_id,
                req.chore_id,
                req.user_id,
                timestamp,
            ));
        }
    } else {
        week.completed_log
            .retain(|entry| !entry.matches(req.chore_id, req.user_id));
    }

    document
}

fn add_chore(mut document: RootDocument, req: AddChoreRequest) -> RootDocument {
    debug!(chore_id = req.id, chore_type = %req.chore_type, "Adding chore to catalog");
    document.master_chores.push(MasterChore::new(
        req.id,
        req.name,
        req.points,
        req.chore_type,
    ));

    if req.chore_type == ChoreType::Weekly {
        if let Some(user_id) = req.assigned_user_id {
            document
                .current_week
                .assigned_chores
                .push(AssignedChore::new(req.id, user_id));
        }
    }

    document
}

fn delete_chore(mut document: RootDocument, req: DeleteChoreRequest) -> RootDocument {
    let id = req.chore_id;
    document.master_chores.retain(|c| c.id != id);
    document
        .current_week
        .assigned_chores
        .retain(|a| a.chore_id != id);
    document
        .current_week
        .completed_log
        .retain(|entry| entry.chore_id != id);
    document
}

fn reset_week(mut document: RootDocument, req: ResetWeekRequest) -> RootDocument {
    let week = &mut document.current_week;
    week.prize = req.prize;
    week.completed_log.clear();
    for assigned in &mut week.assigned_chores {
        assigned.completed = false;
    }
    document
}
