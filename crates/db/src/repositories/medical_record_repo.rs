//! Repository for the `medical_records` table.

use healthbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::medical_record::{CreateMedicalRecord, MedicalRecord, UpdateMedicalRecord};

const COLUMNS: &str = "\
    id, user_id, family_member_id, title, record_type, provider, \
    record_date, description, attachment_url, created_at, updated_at";

/// Provides CRUD operations for medical records.
pub struct MedicalRecordRepo;

impl MedicalRecordRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateMedicalRecord,
    ) -> Result<MedicalRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO medical_records \
                (user_id, family_member_id, title, record_type, provider, \
                 record_date, description, attachment_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalRecord>(&query)
            .bind(user_id)
            .bind(input.family_member_id)
            .bind(&input.title)
            .bind(&input.record_type)
            .bind(&input.provider)
            .bind(input.record_date)
            .bind(&input.description)
            .bind(&input.attachment_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MedicalRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM medical_records WHERE id = $1");
        sqlx::query_as::<_, MedicalRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's records with optional record type and family member
    /// filters, most recent record date first.
    pub async fn list_filtered(
        pool: &PgPool,
        user_id: DbId,
        record_type: Option<&str>,
        family_member_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalRecord>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["user_id = $1".to_string()];
        let mut param_idx: usize = 2;

        if record_type.is_some() {
            conditions.push(format!("record_type = ${param_idx}"));
            param_idx += 1;
        }
        if family_member_id.is_some() {
            conditions.push(format!("family_member_id = ${param_idx}"));
            param_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM medical_records WHERE {} \
             ORDER BY record_date DESC NULLS LAST, created_at DESC \
             LIMIT ${param_idx} OFFSET ${}",
            conditions.join(" AND "),
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, MedicalRecord>(&query).bind(user_id);
        if let Some(rt) = record_type {
            q = q.bind(rt);
        }
        if let Some(fm) = family_member_id {
            q = q.bind(fm);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedicalRecord,
    ) -> Result<Option<MedicalRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE medical_records SET
                family_member_id = COALESCE($2, family_member_id),
                title = COALESCE($3, title),
                record_type = COALESCE($4, record_type),
                provider = COALESCE($5, provider),
                record_date = COALESCE($6, record_date),
                description = COALESCE($7, description),
                attachment_url = COALESCE($8, attachment_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalRecord>(&query)
            .bind(id)
            .bind(input.family_member_id)
            .bind(&input.title)
            .bind(&input.record_type)
            .bind(&input.provider)
            .bind(input.record_date)
            .bind(&input.description)
            .bind(&input.attachment_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM medical_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
