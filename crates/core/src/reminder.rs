//! Reminder frequency constants, validation, and recurrence.

use chrono::{Duration, Months};

use crate::error::CoreError;
use crate::text_validation::{
    validate_one_of, validate_optional_text, validate_required, MAX_TITLE_LENGTH,
};
use crate::types::Timestamp;

pub const FREQUENCY_ONCE: &str = "once";
pub const FREQUENCY_DAILY: &str = "daily";
pub const FREQUENCY_WEEKLY: &str = "weekly";
pub const FREQUENCY_MONTHLY: &str = "monthly";

pub const VALID_FREQUENCIES: &[&str] = &[
    FREQUENCY_ONCE,
    FREQUENCY_DAILY,
    FREQUENCY_WEEKLY,
    FREQUENCY_MONTHLY,
];

pub fn validate_frequency(frequency: &str) -> Result<(), CoreError> {
    validate_one_of(frequency, "frequency", VALID_FREQUENCIES)
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required(title, "Title", MAX_TITLE_LENGTH)
}

pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    validate_optional_text(description, "Description")
}

/// Next occurrence after completing a reminder due at `remind_at`.
///
/// Returns `None` for one-off reminders, which stay completed.
pub fn next_occurrence(remind_at: Timestamp, frequency: &str) -> Option<Timestamp> {
    match frequency {
        FREQUENCY_DAILY => Some(remind_at + Duration::days(1)),
        FREQUENCY_WEEKLY => Some(remind_at + Duration::weeks(1)),
        FREQUENCY_MONTHLY => remind_at.checked_add_months(Months::new(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 8, 30, 0).unwrap()
    }

    #[test]
    fn all_frequencies_are_valid() {
        for f in VALID_FREQUENCIES {
            assert!(validate_frequency(f).is_ok());
        }
        assert!(validate_frequency("hourly").is_err());
    }

    #[test]
    fn once_has_no_next_occurrence() {
        assert_eq!(next_occurrence(at(2026, 3, 1), FREQUENCY_ONCE), None);
    }

    #[test]
    fn recurring_reminders_advance() {
        assert_eq!(next_occurrence(at(2026, 3, 1), FREQUENCY_DAILY), Some(at(2026, 3, 2)));
        assert_eq!(next_occurrence(at(2026, 3, 1), FREQUENCY_WEEKLY), Some(at(2026, 3, 8)));
        assert_eq!(next_occurrence(at(2026, 3, 1), FREQUENCY_MONTHLY), Some(at(2026, 4, 1)));
    }

    #[test]
    fn monthly_clamps_to_end_of_month() {
        assert_eq!(next_occurrence(at(2026, 1, 31), FREQUENCY_MONTHLY), Some(at(2026, 2, 28)));
    }
}
