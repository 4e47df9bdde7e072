//! Typed request payloads, one per mutation.
//!
//! Field names follow the JSON wire format (camelCase). Unknown fields are
//! ignored; missing required fields fail deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use choreboard_models::field::present;
use choreboard_models::{ChoreId, ChoreType, UserId};

/// Body of `POST /api/update_weekly_chore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeeklyChoreRequest {
    pub chore_id: ChoreId,
    pub user_id: UserId,
    pub completed: bool,
    /// Log id to record. Only a missing key falls back to the chore id;
    /// an explicit `null` is recorded as `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_id: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<Value>,
}

/// Body of `POST /api/add_chore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChoreRequest {
    pub id: ChoreId,
    pub name: String,
    pub points: i64,
    #[serde(rename = "type")]
    pub chore_type: ChoreType,
    /// Only used for weekly chores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<UserId>,
}

/// Body of `POST /api/delete_chore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChoreRequest {
    pub chore_id: ChoreId,
}

/// Body of `POST /api/reset_week`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetWeekRequest {
    pub prize: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_weekly_chore_optional_fields() {
        let json = r#"{"choreId": 3, "userId": 1, "completed": true}"#;
        let req: UpdateWeeklyChoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.chore_id, 3);
        assert!(req.log_id.is_none());
        assert!(req.timestamp.is_none());
    }

    #[test]
    fn test_update_weekly_chore_explicit_null_log_id() {
        let json = r#"{"choreId": 3, "userId": 1, "completed": true, "logId": null}"#;
        let req: UpdateWeeklyChoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.log_id, Some(Value::Null));
        assert!(req.timestamp.is_none());
    }

    #[test]
    fn test_update_weekly_chore_requires_completed() {
        let json = r#"{"choreId": 3, "userId": 1}"#;
        assert!(serde_json::from_str::<UpdateWeeklyChoreRequest>(json).is_err());
    }

    #[test]
    fn test_add_chore_request_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "Take out trash",
            "points": 10,
            "type": "weekly",
            "assignedUserId": 1
        }"#;
        let req: AddChoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.chore_type, ChoreType::Weekly);
        assert_eq!(req.assigned_user_id, Some(1));
    }

    #[test]
    fn test_add_chore_request_rejects_unknown_type() {
        let json = r#"{"id": 3, "name": "Nap", "points": 1, "type": "daily"}"#;
        assert!(serde_json::from_str::<AddChoreRequest>(json).is_err());
    }

    #[test]
    fn test_reset_week_requires_prize() {
        assert!(serde_json::from_str::<ResetWeekRequest>("{}").is_err());
    }
}
