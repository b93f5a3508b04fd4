//! Well-known role name constants and the role capability check.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.

use crate::error::CoreError;

pub const ROLE_SUPERADMIN: &str = "superadmin";
pub const ROLE_USER: &str = "user";

/// Fixed denial message for superadmin-only operations.
pub const SUPERADMIN_ONLY_MESSAGE: &str = "Access denied. Superadmin only.";

/// Returns `true` if a caller holding `caller_role` may perform an operation
/// that requires `required_role`.
///
/// Roles are flat: a caller is allowed only when its role matches exactly.
pub fn has_role(caller_role: &str, required_role: &str) -> bool {
    caller_role == required_role
}

/// Guard an operation behind `required_role`.
///
/// Denials carry `denial_message` verbatim so routes can expose a fixed,
/// client-facing reason.
pub fn check_role(
    caller_role: &str,
    required_role: &str,
    denial_message: &str,
) -> Result<(), CoreError> {
    if has_role(caller_role, required_role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(denial_message.to_string()))
    }
}

/// Guard a superadmin-only operation.
pub fn require_superadmin(caller_role: &str) -> Result<(), CoreError> {
    check_role(caller_role, ROLE_SUPERADMIN, SUPERADMIN_ONLY_MESSAGE)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn superadmin_passes_superadmin_check() {
        assert!(require_superadmin(ROLE_SUPERADMIN).is_ok());
    }

    #[test]
    fn user_is_denied_with_fixed_message() {
        let err = require_superadmin(ROLE_USER).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(ref msg) if msg == SUPERADMIN_ONLY_MESSAGE);
    }

    #[test]
    fn unknown_and_empty_roles_are_denied() {
        assert!(require_superadmin("admin").is_err());
        assert!(require_superadmin("").is_err());
        assert!(require_superadmin("SUPERADMIN").is_err());
    }

    #[test]
    fn check_role_matches_exactly() {
        assert!(check_role(ROLE_USER, ROLE_USER, "nope").is_ok());
        assert_matches!(
            check_role(ROLE_USER, "auditor", "Auditors only"),
            Err(CoreError::Forbidden(ref msg)) if msg == "Auditors only"
        );
    }
}
