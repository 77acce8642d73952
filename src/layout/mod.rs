pub mod merge;
pub mod order;
pub mod priority;

pub use merge::merge_layout;
pub use order::apply_section_order;
pub use priority::{layout_for, priority_of};

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Section, SectionSize};

/// Final partition of the section catalog into rendered and hidden
/// sections. Every catalog section appears in exactly one of the two
/// lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub visible: Vec<Section>,
    pub hidden: Vec<Section>,
    /// Planner-chosen sizes keyed by section id. Sections without an
    /// entry render at their default size.
    pub sizes: HashMap<String, SectionSize>,
}
