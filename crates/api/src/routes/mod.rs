pub mod admin;
pub mod auth;
pub mod family_members;
pub mod health;
pub mod health_metrics;
pub mod medical_records;
pub mod reminders;
pub mod wellness_tips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user
/// /auth/password                                   change password
///
/// /admin/users                                     list (superadmin only)
/// /admin/users/{id}                                get, update, deactivate
/// /admin/users/{id}/reset-password                 reset password
///
/// /family-members                                  list, create
/// /family-members/{id}                             get, update, delete
///
/// /medical-records                                 list, create
/// /medical-records/{id}                            get, update, delete
///
/// /health-metrics                                  list, create
/// /health-metrics/classify                         classify a value (GET)
/// /health-metrics/summary                          latest reading per type
/// /health-metrics/{id}                             get, update, delete
///
/// /wellness-tips                                   list, create (create: superadmin)
/// /wellness-tips/{id}                              get, update, delete (writes: superadmin)
///
/// /reminders                                       list, create
/// /reminders/{id}                                  get, update, delete
/// /reminders/{id}/complete                         complete (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/family-members", family_members::router())
        .nest("/medical-records", medical_records::router())
        .nest("/health-metrics", health_metrics::router())
        .nest("/wellness-tips", wellness_tips::router())
        .nest("/reminders", reminders::router())
}
