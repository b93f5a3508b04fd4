//! Repository for the `wellness_tips` table.

use healthbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::wellness_tip::{CreateWellnessTip, UpdateWellnessTip, WellnessTip};

const COLUMNS: &str =
    "id, title, content, category, is_published, created_by, created_at, updated_at";

/// Provides CRUD operations for wellness tips.
pub struct WellnessTipRepo;

impl WellnessTipRepo {
    /// Insert a tip. `category` is passed resolved (defaulted by the caller).
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateWellnessTip,
        category: &str,
    ) -> Result<WellnessTip, sqlx::Error> {
        let query = format!(
            "INSERT INTO wellness_tips (title, content, category, is_published, created_by) \
             VALUES ($1, $2, $3, COALESCE($4, true), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WellnessTip>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(category)
            .bind(input.is_published)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WellnessTip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wellness_tips WHERE id = $1");
        sqlx::query_as::<_, WellnessTip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tips newest first. Drafts are included only when
    /// `include_unpublished` is set.
    pub async fn list_filtered(
        pool: &PgPool,
        category: Option<&str>,
        include_unpublished: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WellnessTip>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if !include_unpublished {
            conditions.push("is_published = true".to_string());
        }
        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM wellness_tips {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, WellnessTip>(&query);
        if let Some(c) = category {
            q = q.bind(c);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWellnessTip,
    ) -> Result<Option<WellnessTip>, sqlx::Error> {
        let query = format!(
            "UPDATE wellness_tips SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category = COALESCE($4, category),
                is_published = COALESCE($5, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WellnessTip>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wellness_tips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
