//! Health metric severity classification.
//!
//! Maps a measured value and its metric type to a [`SeverityLabel`] using
//! static per-type threshold bands. Each band table is an ordered list of
//! `(upper bound, label)` pairs; the first band whose upper bound admits the
//! value wins, and anything above the last band is [`SeverityLabel::Critical`].
//!
//! Classification is total: absent values, NaN, and unrecognized metric
//! types all yield [`SeverityLabel::NotApplicable`] instead of an error.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric types
// ---------------------------------------------------------------------------

/// Wire tag for blood sugar readings (mg/dL).
pub const METRIC_BLOOD_SUGAR: &str = "bloodSugar";
/// Wire tag for blood pressure readings (systolic, mmHg).
pub const METRIC_BLOOD_PRESSURE: &str = "bloodPressure";
/// Wire tag for total cholesterol readings (mg/dL).
pub const METRIC_CHOLESTEROL: &str = "cholesterol";

/// Metric types that have a severity band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    BloodSugar,
    BloodPressure,
    Cholesterol,
}

impl MetricType {
    /// All classified metric types, in display order.
    pub const ALL: [MetricType; 3] = [
        MetricType::BloodSugar,
        MetricType::BloodPressure,
        MetricType::Cholesterol,
    ];

    /// Resolve a wire tag to a known metric type.
    ///
    /// Accepts the camelCase tags used by the mobile client and their
    /// snake_case spellings. Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            METRIC_BLOOD_SUGAR | "blood_sugar" => Some(MetricType::BloodSugar),
            METRIC_BLOOD_PRESSURE | "blood_pressure" => Some(MetricType::BloodPressure),
            METRIC_CHOLESTEROL => Some(MetricType::Cholesterol),
            _ => None,
        }
    }

    /// The canonical wire tag for this metric type.
    pub fn as_tag(self) -> &'static str {
        match self {
            MetricType::BloodSugar => METRIC_BLOOD_SUGAR,
            MetricType::BloodPressure => METRIC_BLOOD_PRESSURE,
            MetricType::Cholesterol => METRIC_CHOLESTEROL,
        }
    }

    /// Conventional unit for readings of this type.
    pub fn default_unit(self) -> &'static str {
        match self {
            MetricType::BloodSugar | MetricType::Cholesterol => "mg/dL",
            MetricType::BloodPressure => "mmHg",
        }
    }

    fn bands(self) -> &'static [Band] {
        match self {
            MetricType::BloodSugar => BLOOD_SUGAR_BANDS,
            MetricType::BloodPressure => BLOOD_PRESSURE_BANDS,
            MetricType::Cholesterol => CHOLESTEROL_BANDS,
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Output of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLabel {
    Low,
    Normal,
    High,
    Critical,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl SeverityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLabel::Low => "Low",
            SeverityLabel::Normal => "Normal",
            SeverityLabel::High => "High",
            SeverityLabel::Critical => "Critical",
            SeverityLabel::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Band tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum UpperBound {
    /// `value < bound`
    Below(f64),
    /// `value <= bound`
    AtMost(f64),
}

impl UpperBound {
    fn admits(self, value: f64) -> bool {
        match self {
            UpperBound::Below(bound) => value < bound,
            UpperBound::AtMost(bound) => value <= bound,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Band {
    upper: UpperBound,
    label: SeverityLabel,
}

const fn band(upper: UpperBound, label: SeverityLabel) -> Band {
    Band { upper, label }
}

const BLOOD_SUGAR_BANDS: &[Band] = &[
    band(UpperBound::Below(70.0), SeverityLabel::Low),
    band(UpperBound::AtMost(140.0), SeverityLabel::Normal),
    band(UpperBound::AtMost(200.0), SeverityLabel::High),
];

const BLOOD_PRESSURE_BANDS: &[Band] = &[
    band(UpperBound::Below(90.0), SeverityLabel::Low),
    band(UpperBound::AtMost(120.0), SeverityLabel::Normal),
    band(UpperBound::AtMost(180.0), SeverityLabel::High),
];

const CHOLESTEROL_BANDS: &[Band] = &[
    band(UpperBound::Below(150.0), SeverityLabel::Low),
    band(UpperBound::AtMost(200.0), SeverityLabel::Normal),
    band(UpperBound::AtMost(250.0), SeverityLabel::High),
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a reading of a known metric type.
pub fn classify_metric(value: Option<f64>, metric_type: MetricType) -> SeverityLabel {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return SeverityLabel::NotApplicable;
    };

    metric_type
        .bands()
        .iter()
        .find(|b| b.upper.admits(value))
        .map_or(SeverityLabel::Critical, |b| b.label)
}

/// Classify a reading given its wire tag.
///
/// Unrecognized tags yield [`SeverityLabel::NotApplicable`].
pub fn classify(value: Option<f64>, metric_type: &str) -> SeverityLabel {
    match MetricType::from_tag(metric_type) {
        Some(known) => classify_metric(value, known),
        None => SeverityLabel::NotApplicable,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
