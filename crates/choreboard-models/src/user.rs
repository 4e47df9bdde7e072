//! Household members.

use serde::{Deserialize, Serialize};

/// Identifier of a household member.
pub type UserId = i64;

/// A household member who can be assigned and complete chores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
