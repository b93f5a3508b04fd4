//! Route definitions for the `/family-members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::family_members;
use crate::state::AppState;

/// Routes mounted at `/family-members`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(family_members::list).post(family_members::create))
        .route(
            "/{id}",
            get(family_members::get_by_id)
                .put(family_members::update)
                .delete(family_members::delete),
        )
}
