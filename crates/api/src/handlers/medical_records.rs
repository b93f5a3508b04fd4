//! Handlers for the `/medical-records` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use healthbook_core::error::CoreError;
use healthbook_core::medical_record::{validate_details, validate_record_type, validate_title};
use healthbook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use healthbook_core::types::DbId;
use healthbook_db::models::medical_record::{
    CreateMedicalRecord, MedicalRecord, MedicalRecordListParams, UpdateMedicalRecord,
};
use healthbook_db::repositories::MedicalRecordRepo;

use super::ensure_family_member_owned;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "MedicalRecord";

/// POST /api/v1/medical-records
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMedicalRecord>,
) -> AppResult<(StatusCode, Json<DataResponse<MedicalRecord>>)> {
    validate_title(&input.title)?;
    validate_record_type(&input.record_type)?;
    validate_details(
        input.provider.as_deref(),
        input.description.as_deref(),
        input.attachment_url.as_deref(),
    )?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let record = MedicalRecordRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        medical_record_id = record.id,
        user_id = auth.user_id,
        record_type = %record.record_type,
        "Medical record created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/v1/medical-records
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<MedicalRecordListParams>,
) -> AppResult<Json<DataResponse<Vec<MedicalRecord>>>> {
    if let Some(ref rt) = params.record_type {
        validate_record_type(rt)?;
    }

    let records = MedicalRecordRepo::list_filtered(
        &state.pool,
        auth.user_id,
        params.record_type.as_deref(),
        params.family_member_id,
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/medical-records/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MedicalRecord>>> {
    let record = find(&state, id).await?;
    auth.ensure_owner(record.user_id, "medical records", true)?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/medical-records/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedicalRecord>,
) -> AppResult<Json<DataResponse<MedicalRecord>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref rt) = input.record_type {
        validate_record_type(rt)?;
    }
    validate_details(
        input.provider.as_deref(),
        input.description.as_deref(),
        input.attachment_url.as_deref(),
    )?;

    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "medical records", false)?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let record = MedicalRecordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/medical-records/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "medical records", false)?;

    if !MedicalRecordRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(medical_record_id = id, user_id = auth.user_id, "Medical record deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<MedicalRecord> {
    MedicalRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}
