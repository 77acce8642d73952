//! AI suggestion data model.

use serde::{Deserialize, Deserializer, Serialize};

/// Confidence-threshold setting controlling how many AI suggestions are shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionDensity {
    Low,
    Medium,
    High,
}

impl Default for SuggestionDensity {
    fn default() -> Self {
        SuggestionDensity::Medium
    }
}

impl SuggestionDensity {
    /// Parse a wire value; anything unrecognized falls back to `Medium`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "low" => SuggestionDensity::Low,
            "high" => SuggestionDensity::High,
            _ => SuggestionDensity::Medium,
        }
    }
}

/// Accepts unknown density strings without failing the surrounding payload.
pub(crate) fn de_density<'de, D>(deserializer: D) -> Result<SuggestionDensity, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(SuggestionDensity::from_wire(&raw))
}

/// An AI-generated clinical suggestion. Filtering derives a view of a
/// suggestion list and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub id: String,
    /// Model confidence in [0, 1]; absent when the source reports none.
    pub confidence: Option<f64>,
    pub text: String,
    pub source: String,
}
