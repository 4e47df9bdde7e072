//! The persisted root document.

use serde::{Deserialize, Serialize};

use crate::chore::{ChoreId, ChoreType, MasterChore};
use crate::user::User;
use crate::week::{CurrentWeek, DEFAULT_PRIZE};

/// The entire application state, read and written as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootDocument {
    pub users: Vec<User>,
    pub master_chores: Vec<MasterChore>,
    pub current_week: CurrentWeek,
}

impl RootDocument {
    /// Returns the document a fresh store starts with: two users, two
    /// repeatable chores and an empty week.
    pub fn seed() -> Self {
        Self {
            users: vec![User::new(1, "Alex"), User::new(2, "Jordan")],
            master_chores: vec![
                MasterChore::new(1, "Washed a dish", 5, ChoreType::Repeatable),
                MasterChore::new(2, "Cleaned cat litter", 20, ChoreType::Repeatable),
            ],
            current_week: CurrentWeek::new(DEFAULT_PRIZE),
        }
    }

    /// Looks up a master chore by id.
    pub fn chore(&self, id: ChoreId) -> Option<&MasterChore> {
        self.master_chores.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_contents() {
        let doc = RootDocument::seed();
        assert_eq!(doc.users.len(), 2);
        assert_eq!(doc.master_chores.len(), 2);
        assert!(doc
            .master_chores
            .iter()
            .all(|c| c.chore_type == ChoreType::Repeatable));
        assert_eq!(doc.current_week.prize, DEFAULT_PRIZE);
        assert!(doc.current_week.assigned_chores.is_empty());
        assert!(doc.current_week.completed_log.is_empty());
    }

    #[test]
    fn test_seed_wire_shape() {
        let value = serde_json::to_value(RootDocument::seed()).unwrap();
        assert_eq!(value["users"][0], json!({"id": 1, "name": "Alex"}));
        assert_eq!(
            value["masterChores"][1],
            json!({"id": 2, "name": "Cleaned cat litter", "points": 20, "type": "repeatable"})
        );
        assert_eq!(
            value["currentWeek"],
            json!({"prize": "Winner picks dinner!", "assignedChores": [], "completedLog": []})
        );
    }

    #[test]
    fn test_chore_lookup() {
        let doc = RootDocument::seed();
        assert_eq!(doc.chore(2).map(|c| c.points), Some(20));
        assert!(doc.chore(99).is_none());
    }
}
