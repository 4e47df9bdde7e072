//! Current week state: assignments and the completion log.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chore::{AssignedChore, ChoreId};
use crate::field::present;
use crate::user::UserId;

/// Prize used when a store is first created.
pub const DEFAULT_PRIZE: &str = "Winner picks dinner!";

/// A record that a chore was completed by a user.
///
/// `logId` and `timestamp` are caller-defined and kept as raw JSON. A missing
/// key stays missing on save, an explicit `null` stays `null`. Entries logged
/// for repeatable chores may carry extra fields, which are preserved verbatim
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedLogEntry {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_id: Option<Value>,
    pub chore_id: ChoreId,
    pub user_id: UserId,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompletedLogEntry {
    /// Creates an entry with both `logId` and `timestamp` set.
    pub fn new(log_id: Value, chore_id: ChoreId, user_id: UserId, timestamp: Value) -> Self {
        Self {
            log_id: Some(log_id),
            chore_id,
            user_id,
            timestamp: Some(timestamp),
            extra: Map::new(),
        }
    }

    /// Returns true if this entry records the given pair.
    pub fn matches(&self, chore_id: ChoreId, user_id: UserId) -> bool {
        self.chore_id == chore_id && self.user_id == user_id
    }
}

/// The week in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeek {
    pub prize: String,
    pub assigned_chores: Vec<AssignedChore>,
    pub completed_log: Vec<CompletedLogEntry>,
}

impl CurrentWeek {
    /// Creates an empty week with the given prize.
    pub fn new(prize: impl Into<String>) -> Self {
        Self {
            prize: prize.into(),
            assigned_chores: Vec::new(),
            completed_log: Vec::new(),
        }
    }

    /// Returns true if a log entry already exists for the pair.
    pub fn is_logged(&self, chore_id: ChoreId, user_id: UserId) -> bool {
        self.completed_log
            .iter()
            .any(|entry| entry.matches(chore_id, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_keeps_extra_fields() {
        let raw = json!({
            "logId": 1718000000,
            "choreId": 1,
            "userId": 2,
            "timestamp": "2024-06-10T08:00:00Z",
            "points": 5,
            "note": "after dinner"
        });
        let entry: CompletedLogEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.extra.len(), 2);
        assert_eq!(entry.extra["note"], "after dinner");
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_log_entry_missing_fields_stay_missing() {
        let raw = json!({"choreId": 1, "userId": 2, "note": "x"});
        let entry: CompletedLogEntry = serde_json::from_value(raw.clone()).unwrap();
        assert!(entry.log_id.is_none());
        assert!(entry.timestamp.is_none());
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_log_entry_explicit_null_is_kept() {
        let raw = json!({"logId": null, "choreId": 4, "userId": 1, "timestamp": null});
        let entry: CompletedLogEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.log_id, Some(Value::Null));
        assert_eq!(entry.timestamp, Some(Value::Null));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_log_entry_requires_chore_and_user() {
        assert!(serde_json::from_value::<CompletedLogEntry>(json!({"userId": 1})).is_err());
        assert!(serde_json::from_value::<CompletedLogEntry>(json!({"choreId": 1})).is_err());
    }

    #[test]
    fn test_is_logged() {
        let mut week = CurrentWeek::new("Movie night");
        assert!(!week.is_logged(3, 1));
        week.completed_log
            .push(CompletedLogEntry::new(json!(3), 3, 1, Value::Null));
        assert!(week.is_logged(3, 1));
        assert!(!week.is_logged(3, 2));
    }
}
