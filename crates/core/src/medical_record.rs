//! Medical record types and validation.

use crate::error::CoreError;
use crate::text_validation::{
    validate_max_length, validate_one_of, validate_optional_text, validate_required,
    MAX_TITLE_LENGTH,
};

pub const RECORD_LAB_RESULT: &str = "lab_result";
pub const RECORD_PRESCRIPTION: &str = "prescription";
pub const RECORD_DIAGNOSIS: &str = "diagnosis";
pub const RECORD_VACCINATION: &str = "vaccination";
pub const RECORD_VISIT_NOTE: &str = "visit_note";
pub const RECORD_IMAGING: &str = "imaging";
pub const RECORD_OTHER: &str = "other";

/// All valid record types.
pub const VALID_RECORD_TYPES: &[&str] = &[
    RECORD_LAB_RESULT,
    RECORD_PRESCRIPTION,
    RECORD_DIAGNOSIS,
    RECORD_VACCINATION,
    RECORD_VISIT_NOTE,
    RECORD_IMAGING,
    RECORD_OTHER,
];

/// Maximum length of the provider (clinic, doctor) name.
pub const MAX_PROVIDER_LENGTH: usize = 200;
/// Maximum length of an attachment URL.
pub const MAX_ATTACHMENT_URL_LENGTH: usize = 2_048;

pub fn validate_record_type(record_type: &str) -> Result<(), CoreError> {
    validate_one_of(record_type, "record type", VALID_RECORD_TYPES)
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required(title, "Title", MAX_TITLE_LENGTH)
}

/// Validate the optional free-text fields of a record.
pub fn validate_details(
    provider: Option<&str>,
    description: Option<&str>,
    attachment_url: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(p) = provider {
        validate_max_length(p, "Provider", MAX_PROVIDER_LENGTH)?;
    }
    validate_optional_text(description, "Description")?;
    if let Some(url) = attachment_url {
        validate_max_length(url, "Attachment URL", MAX_ATTACHMENT_URL_LENGTH)?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CoreError::Validation(
                "Attachment URL must start with http:// or https://".into(),
            ));
        }
    }
    Ok(())
}
