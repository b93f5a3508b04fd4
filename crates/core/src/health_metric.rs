//! Health metric input validation.
//!
//! Metric types are free text so the app can log readings the severity
//! tables do not cover (weight, heart rate); those classify as `N/A`.

use crate::error::CoreError;
use crate::severity::MetricType;
use crate::text_validation::{validate_max_length, validate_optional_text, validate_required};

/// Maximum length of a metric type tag.
pub const MAX_METRIC_TYPE_LENGTH: usize = 50;
/// Maximum length of a unit string.
pub const MAX_UNIT_LENGTH: usize = 20;

pub fn validate_metric_type(metric_type: &str) -> Result<(), CoreError> {
    validate_required(metric_type, "Metric type", MAX_METRIC_TYPE_LENGTH)
}

/// Reject non-finite readings. Absent readings are allowed.
pub fn validate_value(value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::Validation(
            "Metric value must be a finite number".into(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_unit(unit: Option<&str>) -> Result<(), CoreError> {
    match unit {
        Some(u) => validate_max_length(u, "Unit", MAX_UNIT_LENGTH),
        None => Ok(()),
    }
}

pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    validate_optional_text(notes, "Notes")
}

/// Spell a metric type the way it is stored.
///
/// Known types map to their camelCase tag so `blood_sugar` and `bloodSugar`
/// land in the same series; other tags are only trimmed.
pub fn canonical_metric_type(tag: &str) -> String {
    let tag = tag.trim();
    MetricType::from_tag(tag)
        .map(MetricType::as_tag)
        .unwrap_or(tag)
        .to_string()
}

/// Parse a reading passed as text, e.g. a query-string parameter.
///
/// A missing or blank value means "no reading" and yields `None`.
pub fn parse_value(raw: Option<&str>) -> Result<Option<f64>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let value: f64 = raw
        .parse()
        .map_err(|_| CoreError::Validation("Metric value must be a number".into()))?;
    validate_value(Some(value))?;
    Ok(Some(value))
}

/// The unit to store for a reading: the caller's unit, or the conventional
/// unit for classified metric types.
pub fn resolve_unit(metric_type: &str, unit: Option<&str>) -> Option<String> {
    unit.map(str::to_string).or_else(|| {
        MetricType::from_tag(metric_type).map(|t| t.default_unit().to_string())
    })
}
