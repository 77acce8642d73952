pub mod classifier;
pub mod tracker;

pub use classifier::{classify, Engagement};
pub use tracker::EngagementTracker;
