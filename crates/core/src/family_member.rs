//! Family member relationship and profile validation.

use chrono::Utc;

use crate::error::CoreError;
use crate::text_validation::{
    validate_one_of, validate_optional_text, validate_required, MAX_TITLE_LENGTH,
};
use crate::types::Date;

pub const RELATIONSHIP_SELF: &str = "self";
pub const RELATIONSHIP_SPOUSE: &str = "spouse";
pub const RELATIONSHIP_PARTNER: &str = "partner";
pub const RELATIONSHIP_CHILD: &str = "child";
pub const RELATIONSHIP_PARENT: &str = "parent";
pub const RELATIONSHIP_SIBLING: &str = "sibling";
pub const RELATIONSHIP_GRANDPARENT: &str = "grandparent";
pub const RELATIONSHIP_OTHER: &str = "other";

pub const VALID_RELATIONSHIPS: &[&str] = &[
    RELATIONSHIP_SELF,
    RELATIONSHIP_SPOUSE,
    RELATIONSHIP_PARTNER,
    RELATIONSHIP_CHILD,
    RELATIONSHIP_PARENT,
    RELATIONSHIP_SIBLING,
    RELATIONSHIP_GRANDPARENT,
    RELATIONSHIP_OTHER,
];

/// ABO/Rh blood groups accepted on a profile.
pub const VALID_BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub fn validate_relationship(relationship: &str) -> Result<(), CoreError> {
    validate_one_of(relationship, "relationship", VALID_RELATIONSHIPS)
}

pub fn validate_full_name(name: &str) -> Result<(), CoreError> {
    validate_required(name, "Full name", MAX_TITLE_LENGTH)
}

pub fn validate_blood_type(blood_type: Option<&str>) -> Result<(), CoreError> {
    match blood_type {
        Some(bt) => validate_one_of(bt, "blood type", VALID_BLOOD_TYPES),
        None => Ok(()),
    }
}

/// A birth date may not lie in the future.
pub fn validate_date_of_birth(date_of_birth: Option<Date>) -> Result<(), CoreError> {
    match date_of_birth {
        Some(dob) if dob > Utc::now().date_naive() => Err(CoreError::Validation(
            "Date of birth cannot be in the future".into(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    validate_optional_text(notes, "Notes")
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn all_relationships_are_valid() {
        for r in VALID_RELATIONSHIPS {
            assert!(validate_relationship(r).is_ok());
        }
        assert!(validate_relationship("cousin-in-law").is_err());
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        assert!(validate_date_of_birth(Some(tomorrow)).is_err());
        let past = Date::from_ymd_opt(1980, 5, 17).unwrap();
        assert!(validate_date_of_birth(Some(past)).is_ok());
        assert!(validate_date_of_birth(None).is_ok());
    }

    #[test]
    fn blood_type_must_be_known() {
        assert!(validate_blood_type(Some("O-")).is_ok());
        assert!(validate_blood_type(Some("C+")).is_err());
        assert!(validate_blood_type(None).is_ok());
    }
}
