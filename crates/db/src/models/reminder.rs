//! Reminder entity model and DTOs.

use healthbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reminders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: DbId,
    pub user_id: DbId,
    pub family_member_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub remind_at: Timestamp,
    pub frequency: String,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reminder.
#[derive(Debug, Deserialize)]
pub struct CreateReminder {
    pub family_member_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub remind_at: Timestamp,
    /// Defaults to `once` when omitted.
    pub frequency: Option<String>,
}

/// DTO for updating a reminder. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateReminder {
    pub family_member_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub remind_at: Option<Timestamp>,
    pub frequency: Option<String>,
    pub is_completed: Option<bool>,
}

/// Query parameters for listing reminders.
#[derive(Debug, Deserialize)]
pub struct ReminderListParams {
    #[serde(default)]
    pub include_completed: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
