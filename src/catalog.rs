//! Built-in dashboard section catalog.
//!
//! The catalog is closed: every section the dashboard can render is
//! declared here, and plan entries referencing any other id are ignored.

use crate::models::Section;

pub fn builtin_catalog() -> Vec<Section> {
    vec![
        Section::new("vitals", "Vital Signs", true, 8),
        Section::new("problem_list", "Problem List", true, 7),
        Section::new("medications", "Medications", true, 7),
        Section::new("allergies", "Allergies", true, 6),
        Section::new("lab_results", "Lab Results", true, 6),
        Section::new("notes", "Clinical Notes", true, 5),
        Section::new("suggestions", "AI Suggestions", true, 5),
        Section::new("appointments", "Appointments", true, 4),
        Section::new("imaging", "Imaging", false, 4),
        Section::new("ecg", "ECG", false, 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = builtin_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
