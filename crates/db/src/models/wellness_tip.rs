//! Wellness tip entity model and DTOs.

use healthbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wellness_tips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WellnessTip {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_published: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a wellness tip.
#[derive(Debug, Deserialize)]
pub struct CreateWellnessTip {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// DTO for updating a wellness tip. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateWellnessTip {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// Query parameters for listing wellness tips.
#[derive(Debug, Deserialize)]
pub struct WellnessTipListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
