pub mod plan;
pub mod section;
pub mod signal;
pub mod suggestion;

pub use plan::{PatientAdaptation, PatientPlan, Plan, PlanEntry, SectionSize};
pub use section::Section;
pub use signal::{FeedbackSignal, NavigationEvent, SuggestionAction, SuggestionFeedback};
pub use suggestion::{Suggestion, SuggestionDensity};
