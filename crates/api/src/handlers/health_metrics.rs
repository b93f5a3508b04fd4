//! Handlers for the `/health-metrics` resource.
//!
//! Every reading returned to clients carries a `severity` label computed by
//! [`healthbook_core::severity::classify`] at read time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use healthbook_core::error::CoreError;
use healthbook_core::health_metric::{
    canonical_metric_type, parse_value, resolve_unit, validate_metric_type, validate_notes,
    validate_unit, validate_value,
};
use healthbook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use healthbook_core::severity::{classify, SeverityLabel};
use healthbook_core::types::DbId;
use healthbook_db::models::health_metric::{
    ClassifiedMetric, CreateHealthMetric, HealthMetric, HealthMetricListParams,
    UpdateHealthMetric,
};
use healthbook_db::repositories::HealthMetricRepo;
use serde::{Deserialize, Serialize};

use super::ensure_family_member_owned;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "HealthMetric";

/// Query parameters for `GET /health-metrics/classify`.
///
/// `value` stays textual so `?value=` can mean "no reading" instead of
/// failing query deserialization.
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub metric_type: String,
    pub value: Option<String>,
}

/// Result of a stateless classification.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub metric_type: String,
    pub value: Option<f64>,
    pub severity: SeverityLabel,
}

// ---------------------------------------------------------------------------
// POST /health-metrics
// ---------------------------------------------------------------------------

/// Record a reading. Unit defaults to the conventional unit for classified
/// metric types and `recorded_at` defaults to now.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateHealthMetric>,
) -> AppResult<(StatusCode, Json<DataResponse<ClassifiedMetric>>)> {
    validate_metric_type(&input.metric_type)?;
    input.metric_type = canonical_metric_type(&input.metric_type);
    validate_value(input.value)?;
    validate_unit(input.unit.as_deref())?;
    validate_notes(input.notes.as_deref())?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let unit = resolve_unit(&input.metric_type, input.unit.as_deref());
    let recorded_at = input.recorded_at.unwrap_or_else(Utc::now);

    let metric = HealthMetricRepo::create(
        &state.pool,
        auth.user_id,
        &input,
        unit.as_deref(),
        recorded_at,
    )
    .await?;
    let classified = ClassifiedMetric::from(metric);

    tracing::info!(
        health_metric_id = classified.metric.id,
        user_id = auth.user_id,
        metric_type = %classified.metric.metric_type,
        severity = %classified.severity,
        "Health metric recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: classified })))
}

// ---------------------------------------------------------------------------
// GET /health-metrics
// ---------------------------------------------------------------------------

pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HealthMetricListParams>,
) -> AppResult<Json<DataResponse<Vec<ClassifiedMetric>>>> {
    let metric_type = params.metric_type.as_deref().map(canonical_metric_type);
    let metrics = HealthMetricRepo::list_filtered(
        &state.pool,
        auth.user_id,
        metric_type.as_deref(),
        params.family_member_id,
        clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse {
        data: classify_all(metrics),
    }))
}

// ---------------------------------------------------------------------------
// GET /health-metrics/classify
// ---------------------------------------------------------------------------

/// Classify a value without storing anything.
pub async fn classify_reading(
    _auth: AuthUser,
    Query(params): Query<ClassifyParams>,
) -> AppResult<Json<DataResponse<Classification>>> {
    let value = parse_value(params.value.as_deref())?;
    let metric_type = canonical_metric_type(&params.metric_type);
    let severity = classify(value, &metric_type);
    Ok(Json(DataResponse {
        data: Classification {
            metric_type,
            value,
            severity,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /health-metrics/summary
// ---------------------------------------------------------------------------

/// Latest reading of each metric type for the caller (family readings excluded).
pub async fn summary(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClassifiedMetric>>>> {
    let latest = HealthMetricRepo::latest_per_type(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: classify_all(latest),
    }))
}

// ---------------------------------------------------------------------------
// GET / PUT / DELETE /health-metrics/{id}
// ---------------------------------------------------------------------------

pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClassifiedMetric>>> {
    let metric = find(&state, id).await?;
    auth.ensure_owner(metric.user_id, "health metrics", true)?;
    Ok(Json(DataResponse {
        data: metric.into(),
    }))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateHealthMetric>,
) -> AppResult<Json<DataResponse<ClassifiedMetric>>> {
    if let Some(ref mt) = input.metric_type {
        validate_metric_type(mt)?;
    }
    input.metric_type = input.metric_type.as_deref().map(canonical_metric_type);
    validate_value(input.value)?;
    validate_unit(input.unit.as_deref())?;
    validate_notes(input.notes.as_deref())?;

    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "health metrics", false)?;
    ensure_family_member_owned(&state, &auth, input.family_member_id).await?;

    let metric = HealthMetricRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse {
        data: metric.into(),
    }))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find(&state, id).await?;
    auth.ensure_owner(existing.user_id, "health metrics", false)?;

    if !HealthMetricRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(health_metric_id = id, user_id = auth.user_id, "Health metric deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn classify_all(metrics: Vec<HealthMetric>) -> Vec<ClassifiedMetric> {
    metrics.into_iter().map(ClassifiedMetric::from).collect()
}

async fn find(state: &AppState, id: DbId) -> AppResult<HealthMetric> {
    HealthMetricRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}
