use axum::routing::get;
use axum::Router;

use crate::handlers::medical_records;
use crate::state::AppState;

/// Routes mounted at `/medical-records`.
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
        .route("/", get(medical_records::list).post(medical_records::create))
        .route(
            "/{id}",
            get(medical_records::get_by_id)
                .put(medical_records::update)
                .delete(medical_records::delete),
        )
}
