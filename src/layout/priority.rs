//! Specialty-based default prioritization.
//!
//! Scores are a two-level lookup: specialty, then section id. Lookups are
//! total; an unknown specialty falls back to the default table and an
//! unknown section to [`FALLBACK_PRIORITY`]. Unknown inputs never error
//! because the layout must always resolve to something renderable.

use super::LayoutResult;
use crate::models::Section;

/// Score returned when neither table knows the section.
pub const FALLBACK_PRIORITY: u8 = 5;

/// Minimum specialty score that forces a section into the visible set.
const VISIBILITY_THRESHOLD: u8 = 3;

fn default_priority(section_id: &str) -> Option<u8> {
    match section_id {
        "vitals" => Some(8),
        "problem_list" => Some(7),
        "medications" => Some(7),
        "allergies" => Some(6),
        "lab_results" => Some(6),
        "notes" => Some(5),
        "suggestions" => Some(5),
        "appointments" => Some(4),
        "imaging" => Some(4),
        "ecg" => Some(3),
        _ => None,
    }
}

fn specialty_priority(specialty: &str, section_id: &str) -> Option<u8> {
    match specialty {
        "cardiology" => match section_id {
            "ecg" => Some(10),
            "vitals" => Some(9),
            "medications" => Some(7),
            "imaging" => Some(6),
            "lab_results" => Some(6),
            "appointments" => Some(2),
            _ => None,
        },
        "oncology" => match section_id {
            "lab_results" => Some(9),
            "imaging" => Some(8),
            "medications" => Some(8),
            "problem_list" => Some(7),
            "notes" => Some(6),
            "ecg" => Some(1),
            _ => None,
        },
        "pediatrics" => match section_id {
            "vitals" => Some(9),
            "allergies" => Some(8),
            "medications" => Some(7),
            "appointments" => Some(6),
            "imaging" => Some(2),
            _ => None,
        },
        "emergency" => match section_id {
            "vitals" => Some(10),
            "allergies" => Some(9),
            "medications" => Some(8),
            "ecg" => Some(7),
            "imaging" => Some(7),
            "appointments" => Some(1),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve a section's importance for a specialty, 0..=10. Total over all
/// inputs: unknown specialties use the default table, unknown sections
/// score [`FALLBACK_PRIORITY`].
pub fn priority_of(section_id: &str, specialty: Option<&str>) -> u8 {
    specialty
        .and_then(|s| specialty_priority(s, section_id))
        .or_else(|| default_priority(section_id))
        .unwrap_or(FALLBACK_PRIORITY)
}

/// Stable sort, highest specialty score first. Ties fall back to each
/// section's own default priority, and beyond that keep catalog order.
pub fn sort_by_specialty(sections: &[Section], specialty: Option<&str>) -> Vec<Section> {
    let mut sorted: Vec<Section> = sections.to_vec();
    sorted.sort_by(|a, b| {
        let a_score = priority_of(&a.id, specialty);
        let b_score = priority_of(&b.id, specialty);
        b_score
            .cmp(&a_score)
            .then(b.default_priority.cmp(&a.default_priority))
    });
    sorted
}

/// Keep a section when its specialty score clears the visibility
/// threshold or it is visible by default. Without a specialty only the
/// default-visible sections remain.
pub fn filter_by_specialty(sections: &[Section], specialty: Option<&str>) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| match specialty {
            Some(_) => {
                priority_of(&section.id, specialty) >= VISIBILITY_THRESHOLD
                    || section.default_visible
            }
            None => section.default_visible,
        })
        .cloned()
        .collect()
}

/// Static specialty-default layout, used whenever no plan is available.
pub fn layout_for(sections: &[Section], specialty: Option<&str>) -> LayoutResult {
    let visible = sort_by_specialty(&filter_by_specialty(sections, specialty), specialty);
    let hidden = sections
        .iter()
        .filter(|section| !visible.iter().any(|v| v.id == section.id))
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
    use crate::catalog::builtin_catalog;

    #[test]
    fn unknown_section_scores_fallback_even_with_specialty() {
        assert_eq!(priority_of("unknown_section", Some("cardiology")), 5);
    }

    #[test]
    fn known_section_without_specialty_uses_default_table() {
        assert_eq!(priority_of("vitals", None), 8);
    }

    #[test]
    fn specialty_table_overrides_default() {
        assert_eq!(priority_of("ecg", Some("cardiology")), 10);
        assert_eq!(priority_of("ecg", None), 3);
    }

    #[test]
    fn unknown_specialty_falls_back_to_default_table() {
        assert_eq!(priority_of("vitals", Some("astrology")), 8);
    }

    #[test]
    fn specialty_pulls_hidden_section_into_visible_set() {
        let catalog = builtin_catalog();

        // ecg is not default-visible, but cardiology scores it 10
        let without = filter_by_specialty(&catalog, None);
        assert!(!without.iter().any(|s| s.id == "ecg"));

        let with = filter_by_specialty(&catalog, Some("cardiology"));
        assert!(with.iter().any(|s| s.id == "ecg"));
    }

    #[test]
    fn sort_ranks_specialty_favorites_first() {
        let catalog = builtin_catalog();
        let sorted = sort_by_specialty(&catalog, Some("cardiology"));
        assert_eq!(sorted[0].id, "ecg");
        assert_eq!(sorted[1].id, "vitals");
    }

    #[test]
    fn sort_ties_keep_catalog_order() {
        let sections = vec![
            Section::new("alpha", "Alpha", true, 5),
            Section::new("beta", "Beta", true, 5),
            Section::new("gamma", "Gamma", true, 5),
        ];

        // All three are unknown to every table, so they score the same
        let sorted = sort_by_specialty(&sections, Some("cardiology"));
        let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn layout_for_partitions_the_catalog() {
        let catalog = builtin_catalog();
        let layout = layout_for(&catalog, Some("pediatrics"));
        assert_eq!(layout.visible.len() + layout.hidden.len(), catalog.len());

        for section in &catalog {
            let in_visible = layout.visible.iter().any(|s| s.id == section.id);
            let in_hidden = layout.hidden.iter().any(|s| s.id == section.id);
            assert!(in_visible ^ in_hidden, "{} must appear exactly once", section.id);
        }
    }
}
