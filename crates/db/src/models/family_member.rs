//! Family member entity model and DTOs.

use healthbook_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `family_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FamilyMember {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: String,
    pub relationship: String,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a family member.
#[derive(Debug, Deserialize)]
pub struct CreateFamilyMember {
    pub full_name: String,
    pub relationship: String,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a family member. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateFamilyMember {
    pub full_name: Option<String>,
    pub relationship: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub notes: Option<String>,
}
