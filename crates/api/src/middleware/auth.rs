//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use healthbook_core::error::CoreError;
use healthbook_core::roles::{has_role, ROLE_SUPERADMIN};
use healthbook_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller, decoded from `Authorization: Bearer <token>`.
///
/// Decoding only checks the token; it never touches the database.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    pub fn is_superadmin(&self) -> bool {
        has_role(&self.role, ROLE_SUPERADMIN)
    }

    /// Allow access to a row owned by `owner_id`.
    ///
    /// Superadmins may read anyone's rows when `allow_superadmin` is set;
    /// writes always require ownership.
    pub fn ensure_owner(
        &self,
        owner_id: DbId,
        entity: &str,
        allow_superadmin: bool,
    ) -> Result<(), AppError> {
        if owner_id == self.user_id || (allow_superadmin && self.is_superadmin()) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "You can only access your own {entity}"
            ))))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use healthbook_core::roles::ROLE_USER;

    use super::*;

    fn user(id: DbId, role: &str) -> AuthUser {
        AuthUser {
            user_id: id,
            role: role.to_string(),
        }
    }

    #[test]
    fn owner_is_allowed() {
        assert!(user(3, ROLE_USER).ensure_owner(3, "reminders", false).is_ok());
    }

    #[test]
    fn other_user_is_forbidden() {
        assert_matches!(
            user(3, ROLE_USER).ensure_owner(4, "reminders", true),
            Err(AppError::Core(CoreError::Forbidden(_)))
        );
    }

    #[test]
    fn superadmin_bypass_is_opt_in() {
        let admin = user(1, ROLE_SUPERADMIN);
        assert!(admin.ensure_owner(9, "medical records", true).is_ok());
        assert!(admin.ensure_owner(9, "medical records", false).is_err());
    }
}
