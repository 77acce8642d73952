use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ApiResult};

use super::plan_slot::PlanSlot;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

// Import the logging macros (exported at crate root)
use crate::{log_info, log_warn};

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Periodic plan refresh. The first tick fires immediately, so a session
/// fetches its plan at startup rather than one interval later. Fetch
/// failures keep the last good plan and wait for the next tick; there is
/// no retry or backoff in between.
pub async fn refresh_loop(
    session_id: String,
    api: ApiClient,
    slot: Arc<Mutex<PlanSlot>>,
    interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let fut = refresh_once(&api, &slot);
                match tokio::time::timeout(Duration::from_secs(FETCH_TIMEOUT_SECS), fut).await {
                    Ok(Ok(true)) => {}
                    Ok(Ok(false)) => log_info!("superseded plan response discarded for session {}", session_id),
                    Ok(Err(err)) => log_warn!("plan fetch failed for session {}; keeping last good plan: {err}", session_id),
                    Err(_) => log_warn!("plan fetch timeout (> {}s) session {}", FETCH_TIMEOUT_SECS, session_id),
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("adaptation refresh loop shutting down for session {}", session_id);
                break;
            }
        }
    }
}

/// One fetch-and-apply cycle. Returns whether the response was applied
/// (a stale sequence is dropped, which only happens when another fetch
/// was issued concurrently).
pub(crate) async fn refresh_once(api: &ApiClient, slot: &Arc<Mutex<PlanSlot>>) -> ApiResult<bool> {
    let seq = slot.lock().await.issue();
    let plan = api.fetch_plan().await?;

    if let Some(plan) = &plan {
        log_info!(
            "plan received: {} ranked, {} hidden, density {:?}",
            plan.feature_priority.len(),
            plan.hidden_features.len(),
            plan.suggestion_density
        );
    } else {
        log_info!("planner has no plan; using defaults");
    }

    Ok(slot.lock().await.apply(seq, plan))
}
