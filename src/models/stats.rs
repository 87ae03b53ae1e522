//! Aggregate statistics shown on the stat cards.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder shown on the "Pending Review" card when the backend has no value
pub const DEFAULT_PENDING: u64 = 45;
/// Placeholder for the "High Risk" card
pub const DEFAULT_HIGH_RISK: u64 = 12;
/// Placeholder for the "Avg Risk Score" card
pub const DEFAULT_AVG_RISK: f64 = 0.42;
/// Placeholder for the "Active Locations" card
pub const DEFAULT_LOCATIONS: u64 = 8;

/// Response body of `GET /api/stats`. Every field is optional.
///
/// Fields decode independently: a value of the wrong shape becomes `None`
/// instead of failing the whole response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub pending: Option<u64>,
    #[serde(default, alias = "high_risk", deserialize_with = "deserialize_count")]
    pub high_risk: Option<u64>,
    #[serde(default, alias = "avg_risk", deserialize_with = "deserialize_ratio")]
    pub avg_risk: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub locations: Option<u64>,
}

/// Accepts non-negative integers, whole floats (`7.0`) and numeric strings.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_number).and_then(|n| {
        (n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then_some(n as u64)
    }))
}

fn deserialize_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_number).filter(|n| n.is_finite()))
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Zero counts and a zero/NaN average are treated as "no value" and replaced
// by the placeholders.
impl StatsSummary {
    pub fn pending_or_default(&self) -> u64 {
        self.pending.filter(|v| *v != 0).unwrap_or(DEFAULT_PENDING)
    }

    pub fn high_risk_or_default(&self) -> u64 {
        self.high_risk.filter(|v| *v != 0).unwrap_or(DEFAULT_HIGH_RISK)
    }

    pub fn avg_risk_or_default(&self) -> f64 {
        self.avg_risk
            .filter(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(DEFAULT_AVG_RISK)
    }

    pub fn locations_or_default(&self) -> u64 {
        self.locations.filter(|v| *v != 0).unwrap_or(DEFAULT_LOCATIONS)
    }

    /// Average risk formatted with two decimals, e.g. `"0.42"`.
    pub fn avg_risk_display(&self) -> String {
        format!("{:.2}", self.avg_risk_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_stats_use_placeholders() {
        let stats = StatsSummary::default();
        assert_eq!(stats.pending_or_default(), 45);
        assert_eq!(stats.high_risk_or_default(), 12);
        assert_eq!(stats.avg_risk_display(), "0.42");
        assert_eq!(stats.locations_or_default(), 8);
    }

    #[test]
    fn test_partial_stats() {
        let stats: StatsSummary = serde_json::from_value(json!({ "pending": 3 })).unwrap();
        assert_eq!(stats.pending_or_default(), 3);
        assert_eq!(stats.high_risk_or_default(), 12);
        assert_eq!(stats.avg_risk_display(), "0.42");
        assert_eq!(stats.locations_or_default(), 8);
    }

    #[test]
    fn test_camel_case_and_snake_case_keys() {
        let camel: StatsSummary =
            serde_json::from_value(json!({ "highRisk": 4, "avgRisk": 0.9 })).unwrap();
        let snake: StatsSummary =
            serde_json::from_value(json!({ "high_risk": 4, "avg_risk": 0.9 })).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.high_risk_or_default(), 4);
        assert_eq!(camel.avg_risk_display(), "0.90");
    }

    #[test]
    fn test_zero_values_fall_back() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "pending": 0, "highRisk": 0, "avgRisk": 0.0, "locations": 0
        }))
        .unwrap();
        assert_eq!(stats.pending_or_default(), 45);
        assert_eq!(stats.high_risk_or_default(), 12);
        assert_eq!(stats.avg_risk_display(), "0.42");
        assert_eq!(stats.locations_or_default(), 8);
    }

    #[test]
    fn test_whole_float_counts_are_accepted() {
        let stats: StatsSummary =
            serde_json::from_value(json!({ "pending": 3, "locations": 7.0 })).unwrap();
        assert_eq!(stats.pending_or_default(), 3);
        assert_eq!(stats.locations_or_default(), 7);
    }

    #[test]
    fn test_unusable_field_does_not_discard_the_others() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "pending": 3,
            "highRisk": -1,
            "avgRisk": "n/a",
            "locations": 2.5
        }))
        .unwrap();
        assert_eq!(stats.pending_or_default(), 3);
        assert_eq!(stats.high_risk, None);
        assert_eq!(stats.high_risk_or_default(), 12);
        assert_eq!(stats.avg_risk_display(), "0.42");
        assert_eq!(stats.locations_or_default(), 8);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let stats: StatsSummary =
            serde_json::from_value(json!({ "highRisk": "4", "avgRisk": "0.73" })).unwrap();
        assert_eq!(stats.high_risk_or_default(), 4);
        assert_eq!(stats.avg_risk_display(), "0.73");
    }

    #[test]
    fn test_null_fields_fall_back() {
        let stats: StatsSummary =
            serde_json::from_value(json!({ "pending": null, "locations": 17 })).unwrap();
        assert_eq!(stats.pending_or_default(), 45);
        assert_eq!(stats.locations_or_default(), 17);
    }
}
