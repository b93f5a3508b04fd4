//! Route definitions for the `/health-metrics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::health_metrics;
use crate::state::AppState;

/// Routes mounted at `/health-metrics`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /classify  -> classify_reading
/// GET    /summary   -> summary
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(health_metrics::list).post(health_metrics::create),
        )
        .route("/classify", get(health_metrics::classify_reading))
        .route("/summary", get(health_metrics::summary))
        .route(
            "/{id}",
            get(health_metrics::get_by_id)
                .put(health_metrics::update)
                .delete(health_metrics::delete),
        )
}
