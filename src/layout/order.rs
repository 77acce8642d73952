//! Patient-scoped section ordering.
//!
//! The patient-detail screen receives a plain total order over section
//! ids. Unknown ids are dropped, duplicates keep their first occurrence,
//! and any known section the order misses is appended in catalog order.

use std::collections::HashSet;

use crate::models::Section;

pub fn apply_section_order(sections: &[Section], order: &[String]) -> Vec<Section> {
    let mut placed: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<Section> = Vec::with_capacity(sections.len());

    for id in order {
        if let Some(section) = sections.iter().find(|s| &s.id == id) {
            if placed.insert(section.id.as_str()) {
                ordered.push(section.clone());
            }
        }
    }

    for section in sections {
        if !placed.contains(section.id.as_str()) {
            ordered.push(section.clone());
        }
    }

    ordered
}
