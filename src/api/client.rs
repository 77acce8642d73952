//! HTTP client for the MAPE-K planner and monitor endpoints.
//!
//! Every call maps transport and decode problems into [`ApiError`]; the
//! session layer decides what is fatal (nothing is — adaptation is
//! best-effort and failures degrade to the default layout).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{
    FeedbackSignal, NavigationEvent, PatientAdaptation, PatientPlan, Plan, SuggestionFeedback,
};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    Status {
        status: StatusCode,
        endpoint: String,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the session plan. A 404 or empty body means the planner has
    /// nothing for this session yet and is not an error.
    pub async fn fetch_plan(&self) -> ApiResult<Option<Plan>> {
        let endpoint = format!("{}/mape-k/dashboard/plan", self.base_url);
        let response = self.http.get(&endpoint).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                endpoint,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let plan: Plan = serde_json::from_str(&body)?;
        Ok(Some(plan))
    }

    /// Report a weighted usage signal to the bandit trainer. The server
    /// takes these as query parameters, not a JSON body.
    pub async fn send_feedback(&self, signal: &FeedbackSignal) -> ApiResult<()> {
        let endpoint = format!("{}/mape-k/bandit/feedback", self.base_url);
        let mut request = self.http.post(&endpoint).query(&[
            ("feature_key", signal.feature_key.clone()),
            ("success", signal.success.to_string()),
            ("weight", signal.weight.to_string()),
        ]);
        if let Some(specialty) = &signal.specialty {
            request = request.query(&[("specialty", specialty)]);
        }

        expect_success(request.send().await?, &endpoint)
    }

    pub async fn log_navigation(&self, event: &NavigationEvent) -> ApiResult<()> {
        let endpoint = format!("{}/monitor/log-navigation", self.base_url);
        let response = self.http.post(&endpoint).json(event).send().await?;
        expect_success(response, &endpoint)
    }

    pub async fn send_suggestion_feedback(&self, feedback: &SuggestionFeedback) -> ApiResult<()> {
        let endpoint = format!("{}/feedback", self.base_url);
        let response = self.http.post(&endpoint).json(feedback).send().await?;
        expect_success(response, &endpoint)
    }

    /// Fetch the patient-scoped plan used on the patient-detail screen.
    pub async fn fetch_patient_adaptation(&self, patient_id: &str) -> ApiResult<Option<PatientPlan>> {
        let endpoint = format!("{}/mape-k/adaptation/latest", self.base_url);
        let response = self
            .http
            .get(&endpoint)
            .query(&[("patient_id", patient_id)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                endpoint,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let adaptation: PatientAdaptation = serde_json::from_str(&body)?;
        Ok(Some(adaptation.plan_json))
    }
}

fn expect_success(response: reqwest::Response, endpoint: &str) -> ApiResult<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            endpoint: endpoint.to_string(),
        })
    }
}
