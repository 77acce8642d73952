//! Merge of a server plan with the static defaults.
//!
//! The merge is a pure function of its inputs and always yields a full
//! partition of the catalog: every section lands in `visible` or
//! `hidden` exactly once, no matter how malformed the plan is. Unknown
//! plan ids are ignored and duplicated ids keep their last occurrence.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Plan, PlanEntry, Section};

use super::LayoutResult;

/// Combine the section catalog with a fetched plan into a final layout.
pub fn merge_layout(sections: &[Section], plan: Option<&Plan>) -> LayoutResult {
    // Edge case: no plan at all. Fall back to the static default layout.
    let Some(plan) = plan else {
        return default_layout(sections);
    };

    // Step 1: index the ranking. Inserting in order means a duplicated
    // id keeps its last occurrence.
    let mut ranking: HashMap<&str, &PlanEntry> = HashMap::new();
    for entry in &plan.feature_priority {
        ranking.insert(entry.id.as_str(), entry);
    }

    // Step 2: partition the catalog. Hidden wins over everything; a
    // section shows when the plan ranks it or it is visible by default.
    let mut visible: Vec<Section> = Vec::new();
    let mut hidden: Vec<Section> = Vec::new();
    for section in sections {
        let planned = ranking.contains_key(section.id.as_str());
        if plan.hidden_features.contains(&section.id) {
            hidden.push(section.clone());
        } else if planned || section.default_visible {
            visible.push(section.clone());
        } else {
            hidden.push(section.clone());
        }
    }

    // Step 3: order the visible set. Planned sections sort by their plan
    // position; anything included only via default visibility goes after
    // them, highest default priority first. The sort is stable, so
    // catalog order breaks any remaining ties.
    visible.sort_by(|a, b| {
        let a_pos = ranking.get(a.id.as_str()).map(|entry| entry.position);
        let b_pos = ranking.get(b.id.as_str()).map(|entry| entry.position);
        match (a_pos, b_pos) {
            (Some(a_pos), Some(b_pos)) => a_pos.cmp(&b_pos),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.default_priority.cmp(&a.default_priority),
        }
    });

    // Step 4: carry plan sizes for the renderer.
    let sizes = visible
        .iter()
        .filter_map(|section| {
            ranking
                .get(section.id.as_str())
                .map(|entry| (section.id.clone(), entry.size))
        })
        .collect();

    LayoutResult {
        visible,
        hidden,
        sizes,
    }
}

/// Layout used when no plan is held: default-visible sections sorted by
/// their default priority.
fn default_layout(sections: &[Section]) -> LayoutResult {
    let mut visible: Vec<Section> = sections
        .iter()
        .filter(|section| section.default_visible)
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.default_priority.cmp(&a.default_priority));

    let hidden = sections
        .iter()
        .filter(|section| !section.default_visible)
        .cloned()
        .collect();

    LayoutResult {
        visible,
        hidden,
        sizes: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionSize, SuggestionDensity};
    use std::collections::HashSet;

    fn two_section_catalog() -> Vec<Section> {
        vec![
            Section::new("vitals", "Vital Signs", true, 6),
            Section::new("ecg", "ECG", false, 2),
        ]
    }

    fn entry(id: &str, position: i32, size: SectionSize) -> PlanEntry {
        PlanEntry {
            id: id.to_string(),
            position,
            size,
            usage_count: 0,
            daily_average: 0.0,
        }
    }

    fn plan_with(entries: Vec<PlanEntry>, hidden: &[&str]) -> Plan {
        Plan {
            feature_priority: entries,
            hidden_features: hidden.iter().map(|id| id.to_string()).collect(),
            suggestion_density: SuggestionDensity::Medium,
            explanation: String::new(),
        }
    }

    fn assert_partition(sections: &[Section], layout: &LayoutResult) {
        assert_eq!(
            layout.visible.len() + layout.hidden.len(),
            sections.len(),
            "partition size mismatch"
        );
        let mut seen = HashSet::new();
        for section in layout.visible.iter().chain(layout.hidden.iter()) {
            assert!(seen.insert(section.id.clone()), "{} appears twice", section.id);
        }
        for section in sections {
            assert!(seen.contains(&section.id), "{} missing from partition", section.id);
        }
    }

    #[test]
    fn plan_ranked_section_sorts_before_default_visible() {
        let catalog = two_section_catalog();
        let plan = plan_with(vec![entry("ecg", 0, SectionSize::Large)], &[]);

        let layout = merge_layout(&catalog, Some(&plan));
        let ids: Vec<&str> = layout.visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ecg", "vitals"]);
        assert!(layout.hidden.is_empty());
        assert_eq!(layout.sizes.get("ecg"), Some(&SectionSize::Large));
    }

    #[test]
    fn hidden_features_beat_default_visibility() {
        let catalog = two_section_catalog();
        let plan = plan_with(Vec::new(), &["vitals"]);

        let layout = merge_layout(&catalog, Some(&plan));
        assert!(!layout.visible.iter().any(|s| s.id == "vitals"));
        assert!(layout.hidden.iter().any(|s| s.id == "vitals"));
        assert_partition(&catalog, &layout);
    }

    #[test]
    fn hidden_features_beat_plan_ranking() {
        let catalog = two_section_catalog();
        let plan = plan_with(vec![entry("ecg", 0, SectionSize::Small)], &["ecg"]);

        let layout = merge_layout(&catalog, Some(&plan));
        assert!(!layout.visible.iter().any(|s| s.id == "ecg"));
        assert!(layout.hidden.iter().any(|s| s.id == "ecg"));
    }

    #[test]
    fn duplicate_plan_ids_keep_last_occurrence() {
        let catalog = two_section_catalog();
        let plan = plan_with(
            vec![
                entry("ecg", 9, SectionSize::Small),
                entry("vitals", 1, SectionSize::Medium),
                entry("ecg", 0, SectionSize::Large),
            ],
            &[],
        );

        let layout = merge_layout(&catalog, Some(&plan));
        let ids: Vec<&str> = layout.visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ecg", "vitals"]);
        assert_eq!(layout.sizes.get("ecg"), Some(&SectionSize::Large));
    }

    #[test]
    fn unknown_plan_ids_are_ignored() {
        let catalog = two_section_catalog();
        let plan = plan_with(vec![entry("ghost", 0, SectionSize::Large)], &["phantom"]);

        let layout = merge_layout(&catalog, Some(&plan));
        assert_partition(&catalog, &layout);
        assert!(!layout.visible.iter().any(|s| s.id == "ghost"));
        assert!(!layout.hidden.iter().any(|s| s.id == "phantom"));
    }

    #[test]
    fn absent_plan_falls_back_to_default_priorities() {
        let catalog = vec![
            Section::new("notes", "Clinical Notes", true, 5),
            Section::new("vitals", "Vital Signs", true, 8),
            Section::new("ecg", "ECG", false, 3),
        ];

        let layout = merge_layout(&catalog, None);
        let ids: Vec<&str> = layout.visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["vitals", "notes"]);
        assert_eq!(layout.hidden.len(), 1);
        assert_eq!(layout.hidden[0].id, "ecg");
    }

    #[test]
    fn unplanned_sections_order_by_default_priority_after_planned_ones() {
        let catalog = vec![
            Section::new("notes", "Clinical Notes", true, 5),
            Section::new("vitals", "Vital Signs", true, 8),
            Section::new("allergies", "Allergies", true, 6),
        ];
        let plan = plan_with(vec![entry("notes", 2, SectionSize::Medium)], &[]);

        let layout = merge_layout(&catalog, Some(&plan));
        let ids: Vec<&str> = layout.visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["notes", "vitals", "allergies"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let catalog = two_section_catalog();
        let plan = plan_with(vec![entry("ecg", 0, SectionSize::Large)], &["vitals"]);

        let first = merge_layout(&catalog, Some(&plan));
        let second = merge_layout(&catalog, Some(&plan));
        assert_eq!(first, second);
    }
}
