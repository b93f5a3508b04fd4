//! Repository for the `health_metrics` table.

use healthbook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::health_metric::{CreateHealthMetric, HealthMetric, UpdateHealthMetric};

const COLUMNS: &str = "\
    id, user_id, family_member_id, metric_type, value, unit, \
    recorded_at, notes, created_at, updated_at";

/// Provides CRUD operations for health metric readings.
pub struct HealthMetricRepo;

impl HealthMetricRepo {
    /// Insert a reading. `unit` and `recorded_at` are passed resolved so the
    /// caller decides defaults.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateHealthMetric,
        unit: Option<&str>,
        recorded_at: Timestamp,
    ) -> Result<HealthMetric, sqlx::Error> {
        let query = format!(
            "INSERT INTO health_metrics \
                (user_id, family_member_id, metric_type, value, unit, recorded_at, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HealthMetric>(&query)
            .bind(user_id)
            .bind(input.family_member_id)
            .bind(&input.metric_type)
            .bind(input.value)
            .bind(unit)
            .bind(recorded_at)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HealthMetric>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM health_metrics WHERE id = $1");
        sqlx::query_as::<_, HealthMetric>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's readings, newest first, optionally filtered by metric
    /// type and family member.
    pub async fn list_filtered(
        pool: &PgPool,
        user_id: DbId,
        metric_type: Option<&str>,
        family_member_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HealthMetric>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["user_id = $1".to_string()];
        let mut param_idx: usize = 2;

        if metric_type.is_some() {
            conditions.push(format!("metric_type = ${param_idx}"));
            param_idx += 1;
        }
        if family_member_id.is_some() {
            conditions.push(format!("family_member_id = ${param_idx}"));
            param_idx += 1;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM health_metrics WHERE {} \
             ORDER BY recorded_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            conditions.join(" AND "),
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, HealthMetric>(&query).bind(user_id);
        if let Some(mt) = metric_type {
            q = q.bind(mt);
        }
        if let Some(fm) = family_member_id {
            q = q.bind(fm);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// The most recent reading of each metric type for a user's own
    /// (non-family) readings, ordered by metric type.
    pub async fn latest_per_type(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<HealthMetric>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT ON (metric_type) {COLUMNS} FROM health_metrics \
             WHERE user_id = $1 AND family_member_id IS NULL \
             ORDER BY metric_type, recorded_at DESC, id DESC"
        );
        sqlx::query_as::<_, HealthMetric>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHealthMetric,
    ) -> Result<Option<HealthMetric>, sqlx::Error> {
        let query = format!(
            "UPDATE health_metrics SET
                family_member_id = COALESCE($2, family_member_id),
                metric_type = COALESCE($3, metric_type),
                value = COALESCE($4, value),
                unit = COALESCE($5, unit),
                recorded_at = COALESCE($6, recorded_at),
                notes = COALESCE($7, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HealthMetric>(&query)
            .bind(id)
            .bind(input.family_member_id)
            .bind(&input.metric_type)
            .bind(input.value)
            .bind(&input.unit)
            .bind(input.recorded_at)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM health_metrics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
