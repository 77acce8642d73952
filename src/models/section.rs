//! Dashboard section data model.
//!
//! A section is an addressable dashboard widget identified by a stable
//! string key. The set of sections is closed and declared in `catalog`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub label: String,
    /// Whether the section renders when no plan ranks it.
    pub default_visible: bool,
    /// Tie-break rank used when no plan position applies, 0..=10.
    pub default_priority: u8,
}

impl Section {
    pub fn new(id: &str, label: &str, default_visible: bool, default_priority: u8) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            default_visible,
            default_priority,
        }
    }
}
