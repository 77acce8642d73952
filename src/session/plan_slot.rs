//! Holder for the most recently applied plan.
//!
//! Each fetch takes a sequence number before going on the wire; only a
//! response carrying the latest issued sequence may be applied. A slow
//! response superseded by a newer fetch is discarded instead of
//! overwriting a fresher plan.

use chrono::{DateTime, Utc};

use crate::models::Plan;

#[derive(Debug, Default)]
pub struct PlanSlot {
    issued_seq: u64,
    plan: Option<Plan>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl PlanSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a sequence number for a fetch about to be issued.
    pub fn issue(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Replace the held plan wholesale. Returns false when the sequence
    /// is stale; the held plan is untouched in that case. `None` is a
    /// valid replacement: the planner reported it has no plan.
    pub fn apply(&mut self, seq: u64, plan: Option<Plan>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.plan = plan;
        self.refreshed_at = Some(Utc::now());
        true
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }
}
