//! Handlers for the `/family-members` resource.
//!
//! Family members belong to the account that created them. Records,
//! metrics, and reminders may point at one of the caller's family members.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use healthbook_core::error::CoreError;
use healthbook_core::family_member::{
    validate_blood_type, validate_date_of_birth, validate_full_name, validate_notes,
    validate_relationship,
};
use healthbook_core::types::DbId;
use healthbook_db::models::family_member::{
    CreateFamilyMember, FamilyMember, UpdateFamilyMember,
};
use healthbook_db::repositories::FamilyMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "FamilyMember";

/// POST /api/v1/family-members
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFamilyMember>,
) -> AppResult<(StatusCode, Json<DataResponse<FamilyMember>>)> {
    validate_full_name(&input.full_name)?;
    validate_relationship(&input.relationship)?;
    validate_date_of_birth(input.date_of_birth)?;
    validate_blood_type(input.blood_type.as_deref())?;
    validate_notes(input.notes.as_deref())?;

    let member = FamilyMemberRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        family_member_id = member.id,
        user_id = auth.user_id,
        "Family member added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// GET /api/v1/family-members
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FamilyMember>>>> {
    let members = FamilyMemberRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// GET /api/v1/family-members/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FamilyMember>>> {
    let member = find(&state, id).await?;
    auth.ensure_owner(member.user_id, "family members", true)?;
    Ok(Json(DataResponse { data: member }))
}

/// PUT /api/v1/family-members/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFamilyMember>,
) -> AppResult<Json<DataResponse<FamilyMember>>> {
    if let Some(ref name) = input.full_name {
        validate_full_name(name)?;
    }
    if let Some(ref relationship) = input.relationship {
        validate_relationship(relationship)?;
    }
    validate_date_of_birth(input.date_of_birth)?;
    validate_blood_type(input.blood_type.as_deref())?;
    validate_notes(input.notes.as_deref())?;

    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "family members", false)?;

    let member = FamilyMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/family-members/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "family members", false)?;

    if !FamilyMemberRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(family_member_id = id, user_id = auth.user_id, "Family member removed");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<FamilyMember> {
    FamilyMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}
