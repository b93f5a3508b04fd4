//! Request handlers, one module per resource.
//!
//! Handlers validate input through `healthbook_core`, enforce ownership via
//! [`AuthUser`], delegate persistence to the `healthbook_db` repositories,
//! and map failures through [`AppError`].

pub mod admin;
pub mod auth;
pub mod family_members;
pub mod health_metrics;
pub mod medical_records;
pub mod reminders;
pub mod wellness_tips;

use healthbook_core::error::CoreError;
use healthbook_core::types::DbId;
use healthbook_db::repositories::FamilyMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reject a `family_member_id` that does not belong to the caller.
///
/// `None` means the row is about the caller themselves and is always fine.
pub(crate) async fn ensure_family_member_owned(
    state: &AppState,
    auth: &AuthUser,
    family_member_id: Option<DbId>,
) -> AppResult<()> {
    let Some(id) = family_member_id else {
        return Ok(());
    };

    let member = FamilyMemberRepo::find_by_id(&state.pool, id).await?;
    match member {
        Some(m) if m.user_id == auth.user_id => Ok(()),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "Family member {id} does not exist"
        )))),
    }
}
