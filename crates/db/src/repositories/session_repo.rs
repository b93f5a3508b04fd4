//! Repository for the `user_sessions` table.

use healthbook_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::session::{ActiveSession, NewSession};

pub struct SessionRepo;

impl SessionRepo {
    /// Store a fresh session and return its id.
    pub async fn issue(pool: &PgPool, session: &NewSession) -> Result<DbId, sqlx::Error> {
        insert(pool, session).await
    }

    /// Look up an unrevoked, unexpired session by refresh token digest.
    pub async fn find_active(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<Option<ActiveSession>, sqlx::Error> {
        sqlx::query_as::<_, ActiveSession>(
            "SELECT id, user_id, expires_at FROM user_sessions
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()",
        )
        .bind(refresh_token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Revoke `old_id` and store `replacement` atomically.
    ///
    /// Returns `Ok(None)` when `old_id` was already revoked, i.e. the same
    /// refresh token was presented twice. Nothing is inserted in that case.
    pub async fn rotate(
        pool: &PgPool,
        old_id: DbId,
        replacement: &NewSession,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let revoked = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true
             WHERE id = $1 AND is_revoked = false",
        )
        .bind(old_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if revoked == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let id = insert(&mut *tx, replacement).await?;
        tx.commit().await?;
        Ok(Some(id))
    }

    /// Sign a user out everywhere. Returns how many sessions were live.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true
             WHERE user_id = $1 AND is_revoked = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Drop sessions that can no longer be used. Run once at startup.
    pub async fn purge_stale(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_sessions WHERE expires_at < NOW() OR is_revoked = true")
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}

async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    session: &NewSession,
) -> Result<DbId, sqlx::Error> {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(session.user_id)
    .bind(&session.refresh_token_hash)
    .bind(session.expires_at)
    .fetch_one(executor)
    .await
}
