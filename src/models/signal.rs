//! Feedback and monitoring payloads emitted back to the learning system.

use serde::Serialize;

/// A weighted, directional feedback event about a section's usage.
/// Fire-and-forget: the engine keeps no local copy after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSignal {
    pub feature_key: String,
    pub success: bool,
    pub weight: f64,
    pub specialty: Option<String>,
}

/// Navigation between dashboard sections, reported to the monitor endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavigationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_section: Option<String>,
    pub to_section: String,
}

/// Clinician verdict on a single AI suggestion.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAction {
    Accept,
    Ignore,
    NotRelevant,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SuggestionFeedback {
    pub suggestion_id: String,
    pub action: SuggestionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}
