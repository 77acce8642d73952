//! Adaptation plan data model.
//!
//! These types double as the wire format for the planner endpoints, so
//! field names match the server JSON. Malformed values are defaulted
//! rather than rejected: an unparseable size or density never fails the
//! whole plan.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::suggestion::{de_density, SuggestionDensity};

/// Rendered size of a section as chosen by the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionSize {
    Small,
    Medium,
    Large,
}

impl Default for SectionSize {
    fn default() -> Self {
        SectionSize::Medium
    }
}

impl SectionSize {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "small" => SectionSize::Small,
            "large" => SectionSize::Large,
            _ => SectionSize::Medium,
        }
    }
}

fn de_size<'de, D>(deserializer: D) -> Result<SectionSize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(SectionSize::from_wire(&raw))
}

/// One ranked entry of a plan's `feature_priority` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    pub id: String,
    pub position: i32,
    #[serde(default, deserialize_with = "de_size")]
    pub size: SectionSize,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub daily_average: f64,
}

/// Server-computed description of section ordering, visibility, sizing,
/// and suggestion density for a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(default)]
    pub feature_priority: Vec<PlanEntry>,
    #[serde(default)]
    pub hidden_features: HashSet<String>,
    #[serde(default, deserialize_with = "de_density")]
    pub suggestion_density: SuggestionDensity,
    #[serde(default)]
    pub explanation: String,
}

/// Patient-scoped plan from `/mape-k/adaptation/latest`: a plain total
/// order over section ids instead of positioned entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientPlan {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default, deserialize_with = "de_density")]
    pub suggestion_density: SuggestionDensity,
    #[serde(default)]
    pub explanation: String,
}

/// Envelope the adaptation endpoint wraps a patient plan in.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientAdaptation {
    pub plan_json: PatientPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_plan_payload() {
        let json = r#"{
            "feature_priority": [
                { "id": "ecg", "position": 0, "size": "large", "usage_count": 10, "daily_average": 3.5 }
            ],
            "hidden_features": ["imaging"],
            "suggestion_density": "low",
            "explanation": "ECG opened most mornings"
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.feature_priority.len(), 1);
        assert_eq!(plan.feature_priority[0].size, SectionSize::Large);
        assert!(plan.hidden_features.contains("imaging"));
        assert_eq!(plan.suggestion_density, SuggestionDensity::Low);
    }

    #[test]
    fn missing_fields_default() {
        let plan: Plan = serde_json::from_str(r#"{ "hidden_features": ["vitals"] }"#).unwrap();
        assert!(plan.feature_priority.is_empty());
        assert!(plan.hidden_features.contains("vitals"));
        assert_eq!(plan.suggestion_density, SuggestionDensity::Medium);
        assert_eq!(plan.explanation, "");
    }

    #[test]
    fn unknown_enum_values_fall_back_to_medium() {
        let json = r#"{
            "feature_priority": [{ "id": "vitals", "position": 1, "size": "gigantic" }],
            "suggestion_density": "extreme"
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.feature_priority[0].size, SectionSize::Medium);
        assert_eq!(plan.suggestion_density, SuggestionDensity::Medium);
    }

    #[test]
    fn parses_patient_adaptation_envelope() {
        let json = r#"{
            "plan_json": {
                "order": ["ecg", "vitals"],
                "suggestion_density": "high",
                "explanation": "recent cardiology visits"
            }
        }"#;

        let adaptation: PatientAdaptation = serde_json::from_str(json).unwrap();
        assert_eq!(adaptation.plan_json.order, vec!["ecg", "vitals"]);
        assert_eq!(
            adaptation.plan_json.suggestion_density,
            SuggestionDensity::High
        );
    }
}
