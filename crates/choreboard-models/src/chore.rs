//! Chore catalog and weekly assignment types.

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Identifier of a master chore.
pub type ChoreId = i64;

/// How a chore is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreType {
    /// Logged ad hoc, any number of times, without an assignment record.
    Repeatable,
    /// Assigned to a specific user for the week and ticked off once.
    Weekly,
}

impl ChoreType {
    /// Returns the wire name of the chore type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreType::Repeatable => "repeatable",
            ChoreType::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for ChoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chore definition in the global catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterChore {
    pub id: ChoreId,
    pub name: String,
    pub points: i64,
    #[serde(rename = "type")]
    pub chore_type: ChoreType,
}

impl MasterChore {
    pub fn new(id: ChoreId, name: impl Into<String>, points: i64, chore_type: ChoreType) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            chore_type,
        }
    }
}

/// A (chore, user) pairing for the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedChore {
    pub chore_id: ChoreId,
    pub user_id: UserId,
    pub completed: bool,
}

impl AssignedChore {
    /// Creates a new, not yet completed assignment.
    pub fn new(chore_id: ChoreId, user_id: UserId) -> Self {
        Self {
            chore_id,
            user_id,
            completed: false,
        }
    }

    /// Returns true if this assignment is for the given pair.
    pub fn matches(&self, chore_id: ChoreId, user_id: UserId) -> bool {
        self.chore_id == chore_id && self.user_id == user_id
    }
}
