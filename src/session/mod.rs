pub mod controller;
pub mod loop_worker;
pub mod plan_slot;

pub use controller::{AdaptationController, AdaptationSnapshot};
pub use loop_worker::DEFAULT_REFRESH_INTERVAL_SECS;
pub use plan_slot::PlanSlot;
