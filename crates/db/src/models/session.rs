//! Refresh-token sessions.

use healthbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session that can still be exchanged for new tokens.
#[derive(Debug, Clone, FromRow)]
pub struct ActiveSession {
    pub id: DbId,
    pub user_id: DbId,
    pub expires_at: Timestamp,
}

/// A session to persist. Only the SHA-256 hex digest of the refresh token
/// is stored; the plaintext goes to the client once.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
