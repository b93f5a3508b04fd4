//! Lookups against the seeded `roles` table.
//!
//! Roles are fixed by migration, so callers only ever need ids and names.

use std::collections::HashMap;

use healthbook_core::types::DbId;
use sqlx::PgPool;

pub struct RoleRepo;

impl RoleRepo {
    /// Id of the role called `name`.
    pub async fn id_for(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM roles WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Every role id mapped to its name.
    pub async fn names(pool: &PgPool) -> Result<HashMap<DbId, String>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, String)>("SELECT id, name FROM roles")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().collect())
    }

    /// Name of role `id`, or `"unknown"` for a dangling id.
    pub async fn resolve_name(pool: &PgPool, id: DbId) -> Result<String, sqlx::Error> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(name.unwrap_or_else(|| "unknown".to_string()))
    }
}
