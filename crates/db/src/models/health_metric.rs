//! Health metric entity model and DTOs.

use healthbook_core::severity::{classify, SeverityLabel};
use healthbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `health_metrics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HealthMetric {
    pub id: DbId,
    pub user_id: DbId,
    pub family_member_id: Option<DbId>,
    pub metric_type: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub recorded_at: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A health metric together with its derived severity label.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedMetric {
    #[serde(flatten)]
    pub metric: HealthMetric,
    pub severity: SeverityLabel,
}

impl From<HealthMetric> for ClassifiedMetric {
    fn from(metric: HealthMetric) -> Self {
        let severity = classify(metric.value, &metric.metric_type);
        Self { metric, severity }
    }
}

/// DTO for recording a health metric.
#[derive(Debug, Deserialize)]
pub struct CreateHealthMetric {
    pub family_member_id: Option<DbId>,
    pub metric_type: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    /// Defaults to now when omitted.
    pub recorded_at: Option<Timestamp>,
    pub notes: Option<String>,
}

/// DTO for updating a health metric. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateHealthMetric {
    pub family_member_id: Option<DbId>,
    pub metric_type: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub recorded_at: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Query parameters for listing health metrics.
#[derive(Debug, Deserialize)]
pub struct HealthMetricListParams {
    pub metric_type: Option<String>,
    pub family_member_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn reading(metric_type: &str, value: Option<f64>) -> HealthMetric {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
        HealthMetric {
            id: 11,
            user_id: 7,
            family_member_id: None,
            metric_type: metric_type.to_string(),
            value,
            unit: Some("mg/dL".to_string()),
            recorded_at: at,
            notes: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn classified_metric_serializes_flat_with_severity() {
        let json = serde_json::to_value(ClassifiedMetric::from(reading("bloodSugar", Some(141.0))))
            .unwrap();

        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("metric"));
        assert_eq!(obj.len(), 11);
        assert_eq!(json["id"], 11);
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["metric_type"], "bloodSugar");
        assert_eq!(json["value"], 141.0);
        assert_eq!(json["unit"], "mg/dL");
        assert!(json["family_member_id"].is_null());
        assert_eq!(json["severity"], "High");
    }

    #[test]
    fn missing_value_serializes_as_not_applicable() {
        let json = serde_json::to_value(ClassifiedMetric::from(reading("cholesterol", None)))
            .unwrap();

        assert!(json["value"].is_null());
        assert_eq!(json["severity"], "N/A");
    }
}
