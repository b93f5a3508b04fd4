//! Repository for the `reminders` table.

use healthbook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::reminder::{CreateReminder, Reminder, UpdateReminder};

const COLUMNS: &str = "\
    id, user_id, family_member_id, title, description, remind_at, \
    frequency, is_completed, created_at, updated_at";

/// Provides CRUD operations for reminders.
pub struct ReminderRepo;

impl ReminderRepo {
    /// Insert a reminder. `frequency` is passed resolved (defaulted by the caller).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateReminder,
        frequency: &str,
    ) -> Result<Reminder, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminders \
                (user_id, family_member_id, title, description, remind_at, frequency) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(input.family_member_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.remind_at)
            .bind(frequency)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reminders WHERE id = $1");
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's reminders soonest first. Completed ones are skipped
    /// unless `include_completed` is set.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        include_completed: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let completed_filter = if include_completed {
            ""
        } else {
            "AND is_completed = false"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM reminders \
             WHERE user_id = $1 {completed_filter} \
             ORDER BY remind_at ASC, id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReminder,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!(
            "UPDATE reminders SET
                family_member_id = COALESCE($2, family_member_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                remind_at = COALESCE($5, remind_at),
                frequency = COALESCE($6, frequency),
                is_completed = COALESCE($7, is_completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(input.family_member_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.remind_at)
            .bind(&input.frequency)
            .bind(input.is_completed)
            .fetch_optional(pool)
            .await
    }

    /// Mark a one-off reminder completed.
    pub async fn mark_completed(pool: &PgPool, id: DbId) -> Result<Option<Reminder>, sqlx::Error> {
        let query =
            format!("UPDATE reminders SET is_completed = true WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Move a recurring reminder to its next occurrence.
    pub async fn reschedule(
        pool: &PgPool,
        id: DbId,
        next_at: Timestamp,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!(
            "UPDATE reminders SET remind_at = $2, is_completed = false \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(next_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
