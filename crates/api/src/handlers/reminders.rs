//! Handlers for the `/reminders` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use healthbook_core::error::CoreError;
use healthbook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use healthbook_core::reminder::{
    next_occurrence, validate_description, validate_frequency, validate_title, FREQUENCY_ONCE,
};
use healthbook_core::types::DbId;
use healthbook_db::models::reminder::{
    CreateReminder, Reminder, ReminderListParams, UpdateReminder,
};
use healthbook_db::repositories::ReminderRepo;

use super::ensure_family_member_owned;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Reminder";

/// POST /api/v1/reminders
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReminder>,
) -> AppResult<(StatusCode, Json<DataResponse<Reminder>>)> {
    validate_title(&input.title)?;
    validate_description(input.description.as_deref())?;
    let frequency = input.frequency.as_deref().unwrap_or(FREQUENCY_ONCE);
    validate_frequency(frequency)?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let reminder = ReminderRepo::create(&state.pool, auth.user_id, &input, frequency).await?;

    tracing::info!(
        reminder_id = reminder.id,
        user_id = auth.user_id,
        frequency = %reminder.frequency,
        "Reminder created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: reminder })))
}

/// GET /api/v1/reminders
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ReminderListParams>,
) -> AppResult<Json<DataResponse<Vec<Reminder>>>> {
    let reminders = ReminderRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.include_completed,
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse { data: reminders }))
}

/// GET /api/v1/reminders/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Reminder>>> {
    let reminder = find(&state, id).await?;
    auth.ensure_owner(reminder.user_id, "reminders", false)?;
    Ok(Json(DataResponse { data: reminder }))
}

/// PUT /api/v1/reminders/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReminder>,
) -> AppResult<Json<DataResponse<Reminder>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    validate_description(input.description.as_deref())?;
    if let Some(ref frequency) = input.frequency {
        validate_frequency(frequency)?;
    }

    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "reminders", false)?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let reminder = ReminderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: reminder }))
}

/// POST /api/v1/reminders/{id}/complete
///
/// One-off reminders are marked completed. Recurring ones roll forward to
/// their next occurrence and stay active.
pub async fn complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Reminder>>> {
    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "reminders", false)?;

    let updated = match next_occurrence(existing.remind_at, &existing.frequency) {
        Some(next_at) => ReminderRepo::reschedule(&state.pool, id, next_at).await?,
        None => ReminderRepo::mark_completed(&state.pool, id).await?,
    };
    let reminder =
        updated.ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(
        reminder_id = id,
        user_id = auth.user_id,
        is_completed = reminder.is_completed,
        "Reminder completed",
    );

    Ok(Json(DataResponse { data: reminder }))
}

/// DELETE /api/v1/reminders/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "reminders", false)?;

    if !ReminderRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(reminder_id = id, user_id = auth.user_id, "Reminder deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<Reminder> {
    ReminderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}
