//! Handlers for the `/wellness-tips` resource.
//!
//! Any signed-in user may read published tips. Authoring is superadmin-only;
//! the write handlers take [`RequireSuperadmin`] as their first extractor so a
//! denied caller never reaches validation or the database.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use healthbook_core::error::CoreError;
use healthbook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use healthbook_core::types::DbId;
use healthbook_core::wellness_tip::{
    validate_category, validate_content, validate_title, CATEGORY_GENERAL,
};
use healthbook_db::models::wellness_tip::{
    CreateWellnessTip, UpdateWellnessTip, WellnessTip, WellnessTipListParams,
};
use healthbook_db::repositories::WellnessTipRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSuperadmin;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "WellnessTip";

/// GET /api/v1/wellness-tips
///
/// Drafts are listed for superadmins only.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WellnessTipListParams>,
) -> AppResult<Json<DataResponse<Vec<WellnessTip>>>> {
    if let Some(ref category) = params.category {
        validate_category(category)?;
    }

    let tips = WellnessTipRepo::list_filtered(
        &state.pool,
        params.category.as_deref(),
        auth.is_superadmin(),
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: tips }))
}

/// GET /api/v1/wellness-tips/{id}
///
/// An unpublished tip looks missing to everyone but superadmins.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WellnessTip>>> {
    let tip = find(&state, id).await?;
    if !tip.is_published && !auth.is_superadmin() {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    Ok(Json(DataResponse { data: tip }))
}

/// POST /api/v1/wellness-tips
pub async fn create(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Json(input): Json<CreateWellnessTip>,
) -> AppResult<(StatusCode, Json<DataResponse<WellnessTip>>)> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;
    let category = input.category.as_deref().unwrap_or(CATEGORY_GENERAL);
    validate_category(category)?;

    let tip = WellnessTipRepo::create(&state.pool, admin.user_id, &input, category).await?;

    tracing::info!(
        wellness_tip_id = tip.id,
        created_by = admin.user_id,
        category = %tip.category,
        "Wellness tip created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tip })))
}

/// PUT /api/v1/wellness-tips/{id}
pub async fn update(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWellnessTip>,
) -> AppResult<Json<DataResponse<WellnessTip>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content)?;
    }
    if let Some(ref category) = input.category {
        validate_category(category)?;
    }

    let tip = WellnessTipRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(wellness_tip_id = id, updated_by = admin.user_id, "Wellness tip updated");
    Ok(Json(DataResponse { data: tip }))
}

/// DELETE /api/v1/wellness-tips/{id}
pub async fn delete(
    RequireSuperadmin(admin): RequireSuperadmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !WellnessTipRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(wellness_tip_id = id, deleted_by = admin.user_id, "Wellness tip deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<WellnessTip> {
    WellnessTipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}
