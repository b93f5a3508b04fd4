//! Handlers for the `/admin` resource (user management).
//!
//! Every handler is gated by [`RequireSuperadmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use healthbook_core::error::CoreError;
use healthbook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use healthbook_core::text_validation::{validate_required, MAX_TITLE_LENGTH};
use healthbook_core::types::DbId;
use healthbook_db::models::user::{UpdateUser, User, UserResponse};
use healthbook_db::repositories::{RoleRepo, SessionRepo, UserRepo};
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperadmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub role_id: Option<DbId>,
    pub is_active: Option<bool>,
}

/// Request body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    RequireSuperadmin(_admin): RequireSuperadmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let users = UserRepo::list(&state.pool, limit, offset).await?;
    // One roles query instead of one per user.
    let roles = RoleRepo::names(&state.pool).await?;

    let data = users
        .iter()
        .map(|u| {
            let role = roles
                .get(&u.role_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            UserResponse::from_user(u, role)
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    RequireSuperadmin(_admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = find_user(&state, id).await?;
    Ok(Json(DataResponse {
        data: to_response(&state, &user).await?,
    }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Change a user's name, role, or active flag. A superadmin cannot demote or
/// deactivate their own account.
pub async fn update_user(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(ref name) = input.full_name {
        validate_required(name, "Full name", MAX_TITLE_LENGTH)?;
    }

    if let Some(role_id) = input.role_id {
        if !RoleRepo::exists(&state.pool, role_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Role {role_id} does not exist"
            ))));
        }
    }

    if id == admin.user_id {
        let current = find_user(&state, id).await?;
        let demoting = input.role_id.is_some_and(|r| r != current.role_id);
        if demoting || input.is_active == Some(false) {
            return Err(AppError::Core(CoreError::Validation(
                "You cannot demote or deactivate your own account".into(),
            )));
        }
    }

    let update = UpdateUser {
        full_name: input.full_name,
        role_id: input.role_id,
        is_active: input.is_active,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if update.is_active == Some(false) {
        SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    }

    tracing::info!(user_id = id, admin_id = admin.user_id, "User updated");

    Ok(Json(DataResponse {
        data: to_response(&state, &user).await?,
    }))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Soft-deactivate a user and revoke their sessions. Returns 204.
pub async fn deactivate_user(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot deactivate your own account".into(),
        )));
    }

    if !UserRepo::deactivate(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "User deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/users/{id}/reset-password
///
/// Set a new password for a user and sign out all their sessions. Returns 204.
pub async fn reset_password(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    if !UserRepo::update_password(&state.pool, id, &hashed).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "Password reset by superadmin");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_user(state: &AppState, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

async fn to_response(state: &AppState, user: &User) -> AppResult<UserResponse> {
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(UserResponse::from_user(user, role))
}
