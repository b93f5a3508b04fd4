//! Role gate for superadmin-only routes.
//!
//! [`RequireSuperadmin`] first runs the core capability check on the token's
//! role claim, so ordinary users are denied without touching the database.
//! Tokens that claim `superadmin` are then re-checked against the stored
//! account, which revokes a demoted or deactivated admin immediately instead
//! of when their access token expires.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use healthbook_core::error::CoreError;
use healthbook_core::roles::require_superadmin;
use healthbook_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `superadmin` role. Rejects with 403 and the fixed
/// `"Access denied. Superadmin only."` message otherwise.
///
/// ```ignore
/// async fn publish(RequireSuperadmin(admin): RequireSuperadmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSuperadmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperadmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_superadmin(&user.role)?;

        let access = UserRepo::find_access(&state.pool, user.user_id)
            .await?
            .filter(|a| a.is_active)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account is deactivated".into()))
            })?;
        require_superadmin(&access.role)?;

        Ok(RequireSuperadmin(AuthUser {
            user_id: user.user_id,
            role: access.role,
        }))
    }
}
