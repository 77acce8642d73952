//! Per-section open-observation store.
//!
//! One open observation per feature id: starting to view a feature that
//! is already being viewed overwrites the start time and the discarded
//! interval emits nothing. The tracker belongs to a single session task;
//! classification itself stays in `classifier` so it can be tested
//! without any timing state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::FeedbackSignal;

use super::classifier::{scroll_past_signal, signal_for};

#[derive(Debug, Default)]
pub struct EngagementTracker {
    open: HashMap<String, DateTime<Utc>>,
    specialty: Option<String>,
}

impl EngagementTracker {
    pub fn new(specialty: Option<String>) -> Self {
        Self {
            open: HashMap::new(),
            specialty,
        }
    }

    /// Open an observation for a feature. Last write wins on re-entry.
    pub fn start_viewing(&mut self, feature_id: &str, now: DateTime<Utc>) {
        self.open.insert(feature_id.to_string(), now);
    }

    /// Close the open observation, emitting at most one signal. A stop
    /// without a matching start is a no-op.
    pub fn stop_viewing(&mut self, feature_id: &str, now: DateTime<Utc>) -> Option<FeedbackSignal> {
        let started = self.open.remove(feature_id)?;
        let duration_ms = (now - started).num_milliseconds().max(0);
        signal_for(feature_id, duration_ms, self.specialty.as_deref())
    }

    /// The user passed over a feature without engaging.
    pub fn scrolled_past(&self, feature_id: &str) -> FeedbackSignal {
        scroll_past_signal(feature_id, self.specialty.as_deref())
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Discard all open observations without emitting anything. Used on
    /// session teardown.
    pub fn clear(&mut self) {
        self.open.clear();
    }
}
