//! Medical record entity model and DTOs.

use healthbook_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `medical_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicalRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub family_member_id: Option<DbId>,
    pub title: String,
    pub record_type: String,
    pub provider: Option<String>,
    pub record_date: Option<Date>,
    pub description: Option<String>,
    pub attachment_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a medical record.
#[derive(Debug, Deserialize)]
pub struct CreateMedicalRecord {
    pub family_member_id: Option<DbId>,
    pub title: String,
    pub record_type: String,
    pub provider: Option<String>,
    pub record_date: Option<Date>,
    pub description: Option<String>,
    pub attachment_url: Option<String>,
}

/// DTO for updating a medical record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateMedicalRecord {
    pub family_member_id: Option<DbId>,
    pub title: Option<String>,
    pub record_type: Option<String>,
    pub provider: Option<String>,
    pub record_date: Option<Date>,
    pub description: Option<String>,
    pub attachment_url: Option<String>,
}

/// Query parameters for listing medical records.
#[derive(Debug, Deserialize)]
pub struct MedicalRecordListParams {
    pub record_type: Option<String>,
    pub family_member_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
