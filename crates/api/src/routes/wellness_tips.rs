//! Route definitions for the `/wellness-tips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::wellness_tips;
use crate::state::AppState;

/// Routes mounted at `/wellness-tips`.
///
/// Reads need any signed-in user; writes require `superadmin`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (superadmin)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (superadmin)
/// DELETE /{id}  -> delete (superadmin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wellness_tips::list).post(wellness_tips::create),
        )
        .route(
            "/{id}",
            get(wellness_tips::get_by_id)
                .put(wellness_tips::update)
                .delete(wellness_tips::delete),
        )
}
