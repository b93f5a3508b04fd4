use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use healthbook_core::error::CoreError;
use serde::Serialize;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error type returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; database failures are mapped to
/// a status here so handlers can propagate `sqlx::Error` with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ErrorBody {
    fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }

    fn internal() -> Self {
        Self::new("INTERNAL_ERROR", INTERNAL_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(core) => core_error_body(core),
            AppError::Database(err) => database_error_body(&err),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("BAD_REQUEST", msg))
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
        };
        (status, Json(body)).into_response()
    }
}

fn core_error_body(err: CoreError) -> (StatusCode, ErrorBody) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("NOT_FOUND", format!("{entity} with id {id} not found")),
        ),
        CoreError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("VALIDATION_ERROR", msg),
        ),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::new("CONFLICT", msg)),
        CoreError::Unauthorized(msg) => (
            StatusCode::UNAUTHORIZED,
            ErrorBody::new("UNAUTHORIZED", msg),
        ),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new("FORBIDDEN", msg)),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
        }
    }
}

fn database_error_body(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("NOT_FOUND", "Resource not found"),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if let Some(mapped) = constraint_violation(code.as_deref(), db_err.constraint()) {
                tracing::debug!(error = %db_err, "Constraint violation");
                return mapped;
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
        }
    }
}

/// Map a constraint violation reported by Postgres to a client error.
///
/// Unique violations on `uq_`-prefixed constraints become 409 and foreign
/// key violations become 400. Anything else returns `None` and is treated
/// as a server fault.
fn constraint_violation(
    sqlstate: Option<&str>,
    constraint: Option<&str>,
) -> Option<(StatusCode, ErrorBody)> {
    match sqlstate? {
        UNIQUE_VIOLATION => {
            let constraint = constraint.filter(|c| c.starts_with("uq_"))?;
            Some((
                StatusCode::CONFLICT,
                ErrorBody::new("CONFLICT", unique_message(constraint)),
            ))
        }
        FOREIGN_KEY_VIOLATION => Some((
            StatusCode::BAD_REQUEST,
            ErrorBody::new("VALIDATION_ERROR", "Referenced record does not exist"),
        )),
        _ => None,
    }
}

fn unique_message(constraint: &str) -> String {
    match constraint {
        "uq_users_email" => "An account with this email already exists".to_string(),
        "uq_roles_name" => "A role with this name already exists".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_a_friendly_conflict() {
        let (status, body) =
            constraint_violation(Some(UNIQUE_VIOLATION), Some("uq_users_email")).unwrap();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "CONFLICT");
        assert_eq!(body.error, "An account with this email already exists");
    }

    #[test]
    fn other_uq_constraints_name_the_constraint() {
        let (status, body) = constraint_violation(
            Some(UNIQUE_VIOLATION),
            Some("uq_user_sessions_refresh_token_hash"),
        )
        .unwrap();
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.error.ends_with("uq_user_sessions_refresh_token_hash"));
    }

    #[test]
    fn unprefixed_unique_index_is_not_a_client_error() {
        assert!(constraint_violation(Some(UNIQUE_VIOLATION), Some("users_pkey")).is_none());
        assert!(constraint_violation(Some(UNIQUE_VIOLATION), None).is_none());
    }

    #[test]
    fn foreign_key_violation_is_a_validation_error() {
        let (status, body) = constraint_violation(
            Some(FOREIGN_KEY_VIOLATION),
            Some("health_metrics_family_member_id_fkey"),
        )
        .unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.error, "Referenced record does not exist");
    }

    #[test]
    fn unknown_sqlstate_is_unmapped() {
        assert!(constraint_violation(Some("40001"), None).is_none());
        assert!(constraint_violation(None, Some("uq_users_email")).is_none());
    }
}
