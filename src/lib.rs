pub mod api;
pub mod catalog;
pub mod engagement;
pub mod layout;
pub mod models;
pub mod session;
pub mod settings;
pub mod suggestions;
mod utils;

pub use api::{ApiClient, ApiError};
pub use catalog::builtin_catalog;
pub use engagement::{classify, Engagement, EngagementTracker};
pub use layout::{apply_section_order, layout_for, merge_layout, LayoutResult};
pub use models::{
    FeedbackSignal, NavigationEvent, PatientPlan, Plan, PlanEntry, Section, SectionSize,
    Suggestion, SuggestionAction, SuggestionDensity, SuggestionFeedback,
};
pub use session::{AdaptationController, AdaptationSnapshot};
pub use settings::{AdaptationSettings, SettingsStore};
pub use suggestions::filter_by_density;
