//! Shared text validation helpers.
//!
//! Reusable length and blank checks used by the entity modules.

use crate::error::CoreError;

/// Maximum length for titles and names (characters).
pub const MAX_TITLE_LENGTH: usize = 200;
/// Maximum length for free-form text such as notes or descriptions.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Validate a required short text field: non-blank and at most `max` characters.
pub fn validate_required(value: &str, name: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    validate_max_length(value, name, max)
}

/// Validate that a text field does not exceed `max` characters.
pub fn validate_max_length(value: &str, name: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{name} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate an optional free-form text field against [`MAX_TEXT_LENGTH`].
pub fn validate_optional_text(value: Option<&str>, name: &str) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_length(v, name, MAX_TEXT_LENGTH),
        None => Ok(()),
    }
}

/// Validate that `value` is one of `allowed`.
pub fn validate_one_of(value: &str, name: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {name} '{value}'. Must be one of: {allowed:?}"
        )))
    }
}
