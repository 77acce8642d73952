//! Engagement classification.
//!
//! Converts the duration of a closed viewing observation into a weighted
//! feedback signal for the upstream learning system. Scroll-past events
//! are a separate entry point with a fixed negative weight, not a
//! duration bucket.

use crate::models::FeedbackSignal;

/// Durations under this are a quick, successful glance.
pub const QUICK_GLANCE_MAX_MS: i64 = 5_000;
/// Durations over this count as prolonged, deliberate engagement.
pub const PROLONGED_MIN_MS: i64 = 30_000;

pub const QUICK_WEIGHT: f64 = 1.0;
pub const PROLONGED_WEIGHT: f64 = 1.5;
pub const SCROLL_PAST_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    Quick,
    Prolonged,
    /// Neither bucket; no signal is emitted.
    Neutral,
}

pub fn classify(duration_ms: i64) -> Engagement {
    if duration_ms < QUICK_GLANCE_MAX_MS {
        Engagement::Quick
    } else if duration_ms > PROLONGED_MIN_MS {
        Engagement::Prolonged
    } else {
        Engagement::Neutral
    }
}

/// Signal for a closed observation, or `None` for neutral durations.
pub fn signal_for(
    feature_key: &str,
    duration_ms: i64,
    specialty: Option<&str>,
) -> Option<FeedbackSignal> {
    let (success, weight) = match classify(duration_ms) {
        Engagement::Quick => (true, QUICK_WEIGHT),
        Engagement::Prolonged => (true, PROLONGED_WEIGHT),
        Engagement::Neutral => return None,
    };

    Some(FeedbackSignal {
        feature_key: feature_key.to_string(),
        success,
        weight,
        specialty: specialty.map(str::to_string),
    })
}

/// Signal for passing over a feature without engaging. Always emitted,
/// regardless of any open observation.
pub fn scroll_past_signal(feature_key: &str, specialty: Option<&str>) -> FeedbackSignal {
    FeedbackSignal {
        feature_key: feature_key.to_string(),
        success: false,
        weight: SCROLL_PAST_WEIGHT,
        specialty: specialty.map(str::to_string),
    }
}
