//! Confidence-density filtering of AI suggestions.
//!
//! Derives an order-preserving view of a suggestion list; the underlying
//! list is never mutated. The three densities are nested: everything the
//! low setting shows, medium shows too, and high shows everything.

use crate::models::{Suggestion, SuggestionDensity};

/// Minimum confidence shown at low density.
pub const LOW_DENSITY_MIN_CONFIDENCE: f64 = 0.7;
/// Minimum confidence shown at medium density.
pub const MEDIUM_DENSITY_MIN_CONFIDENCE: f64 = 0.4;

pub fn filter_by_density(
    suggestions: &[Suggestion],
    density: SuggestionDensity,
) -> Vec<&Suggestion> {
    let minimum = match density {
        SuggestionDensity::High => return suggestions.iter().collect(),
        SuggestionDensity::Medium => MEDIUM_DENSITY_MIN_CONFIDENCE,
        SuggestionDensity::Low => LOW_DENSITY_MIN_CONFIDENCE,
    };

    suggestions
        .iter()
        .filter(|suggestion| match suggestion.confidence {
            // Out-of-range confidences are clamped, not rejected
            Some(confidence) => confidence.clamp(0.0, 1.0) >= minimum,
            None => false,
        })
        .collect()
}
