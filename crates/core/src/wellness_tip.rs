//! Wellness tip categories and validation.

use crate::error::CoreError;
use crate::text_validation::{validate_one_of, validate_required, MAX_TITLE_LENGTH};

pub const CATEGORY_NUTRITION: &str = "nutrition";
pub const CATEGORY_EXERCISE: &str = "exercise";
pub const CATEGORY_SLEEP: &str = "sleep";
pub const CATEGORY_MENTAL_HEALTH: &str = "mental_health";
pub const CATEGORY_PREVENTIVE_CARE: &str = "preventive_care";
pub const CATEGORY_GENERAL: &str = "general";

pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_NUTRITION,
    CATEGORY_EXERCISE,
    CATEGORY_SLEEP,
    CATEGORY_MENTAL_HEALTH,
    CATEGORY_PREVENTIVE_CARE,
    CATEGORY_GENERAL,
];

/// Maximum length of a tip body (characters).
pub const MAX_CONTENT_LENGTH: usize = 5_000;

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    validate_one_of(category, "category", VALID_CATEGORIES)
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required(title, "Title", MAX_TITLE_LENGTH)
}

pub fn validate_content(content: &str) -> Result<(), CoreError> {
    validate_required(content, "Content", MAX_CONTENT_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_are_valid() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok());
        }
        assert!(validate_category("astrology").is_err());
    }

    #[test]
    fn content_limits() {
        assert!(validate_content("Drink water.").is_ok());
        assert!(validate_content(" ").is_err());
        assert!(validate_content(&"a".repeat(MAX_CONTENT_LENGTH + 1)).is_err());
    }
}
