use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::engagement::EngagementTracker;
use crate::layout::{apply_section_order, layout_for, merge_layout, LayoutResult};
use crate::models::{
    FeedbackSignal, NavigationEvent, Section, Suggestion, SuggestionAction, SuggestionDensity,
    SuggestionFeedback,
};
use crate::suggestions::filter_by_density;

use super::loop_worker::{refresh_loop, refresh_once, DEFAULT_REFRESH_INTERVAL_SECS};
use super::plan_slot::PlanSlot;

/// UI-facing snapshot of the adaptation state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationSnapshot {
    pub session_id: String,
    pub specialty: Option<String>,
    pub plan_held: bool,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub suggestion_density: SuggestionDensity,
    pub explanation: Option<String>,
}

/// Owns one session's adaptation state: the refresh cadence, the held
/// plan, and the per-feature engagement observations. Everything it
/// emits upstream is fire-and-forget; nothing here ever raises to the
/// rendering layer.
pub struct AdaptationController {
    api: ApiClient,
    catalog: Arc<Vec<Section>>,
    specialty: Option<String>,
    session_id: String,
    refresh_interval: Duration,
    slot: Arc<Mutex<PlanSlot>>,
    tracker: Arc<Mutex<EngagementTracker>>,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl AdaptationController {
    pub fn new(api: ApiClient, catalog: Vec<Section>, specialty: Option<String>) -> Self {
        Self {
            api,
            catalog: Arc::new(catalog),
            specialty: specialty.clone(),
            session_id: Uuid::new_v4().to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            slot: Arc::new(Mutex::new(PlanSlot::new())),
            tracker: Arc::new(Mutex::new(EngagementTracker::new(specialty))),
            handle: None,
            cancel_token: None,
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Spawn the periodic refresh task. The first fetch happens right
    /// away, not one interval later.
    pub async fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            bail!("adaptation refresh already active");
        }

        info!("starting adaptation session {}", self.session_id);

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(refresh_loop(
            self.session_id.clone(),
            self.api.clone(),
            self.slot.clone(),
            self.refresh_interval,
            cancel_token.clone(),
        ));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    /// Cancel the refresh task and drop any open observations. The timer
    /// must not outlive the session that owns it.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("adaptation refresh task failed to join")?;
        }

        self.tracker.lock().await.clear();
        info!("adaptation session {} stopped", self.session_id);
        Ok(())
    }

    /// Fetch and apply a plan outside the regular cadence.
    pub async fn refresh_now(&self) -> Result<bool> {
        refresh_once(&self.api, &self.slot)
            .await
            .context("manual plan refresh failed")
    }

    /// The layout the dashboard should render right now. With no plan
    /// held this degrades to the static specialty-default layout.
    pub async fn current_layout(&self) -> LayoutResult {
        let slot = self.slot.lock().await;
        match slot.plan() {
            Some(plan) => merge_layout(&self.catalog, Some(plan)),
            None => layout_for(&self.catalog, self.specialty.as_deref()),
        }
    }

    pub async fn snapshot(&self) -> AdaptationSnapshot {
        let slot = self.slot.lock().await;
        AdaptationSnapshot {
            session_id: self.session_id.clone(),
            specialty: self.specialty.clone(),
            plan_held: slot.plan().is_some(),
            refreshed_at: slot.refreshed_at(),
            suggestion_density: slot
                .plan()
                .map(|plan| plan.suggestion_density)
                .unwrap_or_default(),
            explanation: slot
                .plan()
                .filter(|plan| !plan.explanation.is_empty())
                .map(|plan| plan.explanation.clone()),
        }
    }

    /// Filter a suggestion list by the density the current plan asks for.
    pub async fn filter_suggestions(&self, suggestions: &[Suggestion]) -> Vec<Suggestion> {
        let density = self.snapshot().await.suggestion_density;
        filter_by_density(suggestions, density)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn start_viewing(&self, feature_id: &str) {
        self.tracker
            .lock()
            .await
            .start_viewing(feature_id, Utc::now());
    }

    /// Close the observation and relay the classified signal upstream.
    /// Also returns it so callers can inspect what was sent.
    pub async fn stop_viewing(&self, feature_id: &str) -> Option<FeedbackSignal> {
        let signal = self
            .tracker
            .lock()
            .await
            .stop_viewing(feature_id, Utc::now())?;
        self.dispatch_feedback(signal.clone());
        Some(signal)
    }

    /// The user passed over a feature without engaging.
    pub async fn scrolled_past(&self, feature_id: &str) -> FeedbackSignal {
        let signal = self.tracker.lock().await.scrolled_past(feature_id);
        self.dispatch_feedback(signal.clone());
        signal
    }

    pub fn log_navigation(
        &self,
        patient_id: Option<String>,
        from_section: Option<String>,
        to_section: String,
    ) {
        let api = self.api.clone();
        let event = NavigationEvent {
            patient_id,
            from_section,
            to_section,
        };
        tokio::spawn(async move {
            if let Err(err) = api.log_navigation(&event).await {
                warn!("navigation log for {} dropped: {err}", event.to_section);
            }
        });
    }

    pub fn send_suggestion_feedback(
        &self,
        suggestion_id: String,
        action: SuggestionAction,
        patient_id: Option<String>,
    ) {
        let api = self.api.clone();
        let feedback = SuggestionFeedback {
            suggestion_id,
            action,
            patient_id,
        };
        tokio::spawn(async move {
            if let Err(err) = api.send_suggestion_feedback(&feedback).await {
                warn!(
                    "suggestion feedback for {} dropped: {err}",
                    feedback.suggestion_id
                );
            }
        });
    }

    /// Section order for the patient-detail screen. Any failure degrades
    /// to the specialty-default order.
    pub async fn patient_layout(&self, patient_id: &str) -> (Vec<Section>, SuggestionDensity) {
        match self.api.fetch_patient_adaptation(patient_id).await {
            Ok(Some(plan)) => (
                apply_section_order(&self.catalog, &plan.order),
                plan.suggestion_density,
            ),
            Ok(None) => self.default_patient_layout(),
            Err(err) => {
                warn!("patient adaptation fetch failed for {patient_id}: {err}");
                self.default_patient_layout()
            }
        }
    }

    fn default_patient_layout(&self) -> (Vec<Section>, SuggestionDensity) {
        let layout = layout_for(&self.catalog, self.specialty.as_deref());
        let mut sections = layout.visible;
        sections.extend(layout.hidden);
        (sections, SuggestionDensity::default())
    }

    fn dispatch_feedback(&self, signal: FeedbackSignal) {
        let api = self.api.clone();
        tokio::spawn(async move {
            if let Err(err) = api.send_feedback(&signal).await {
                warn!("feedback for {} dropped: {err}", signal.feature_key);
            }
        });
    }
}
