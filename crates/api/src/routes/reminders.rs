use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reminders;
use crate::state::AppState;

/// Routes mounted at `/reminders`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/complete  -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reminders::list).post(reminders::create))
        .route(
            "/{id}",
            get(reminders::get_by_id)
                .put(reminders::update)
                .delete(reminders::delete),
        )
        .route("/{id}/complete", post(reminders::complete))
}
