//! Fire-and-forget submission of content feedback and upsell interest.
//!
//! The receiving endpoints do not return anything the portal can read, so the
//! absence of a transport error is the only success signal.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use portal_core::Clock;
use portal_core::model::ViewId;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::error::SubmissionError;

const DEFAULT_USER_EMAIL: &str = "unknown@user.com";

//
// ─── CONTROL STATE ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    /// The last attempt failed; the control can be used again.
    Failed,
}

/// State of a submit control (button plus form).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionControl {
    state: SubmissionState,
}

impl SubmissionControl {
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Move to `Sending`. Returns `false` while a submission is in flight or
    /// after one succeeded.
    pub fn begin(&mut self) -> bool {
        match self.state {
            SubmissionState::Idle | SubmissionState::Failed => {
                self.state = SubmissionState::Sending;
                true
            }
            SubmissionState::Sending | SubmissionState::Sent => false,
        }
    }

    pub fn finish<T>(&mut self, result: &Result<T, SubmissionError>) {
        if self.state != SubmissionState::Sending {
            return;
        }
        self.state = match result {
            Ok(_) => SubmissionState::Sent,
            Err(_) => SubmissionState::Failed,
        };
    }

    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// The form is replaced by a thank-you message once sent.
    #[must_use]
    pub fn form_visible(&self) -> bool {
        self.state != SubmissionState::Sent
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }
}

/// Text shown next to the rating slider.
#[must_use]
pub fn rating_label(rating: u8) -> String {
    format!("{rating}/5")
}

//
// ─── PAYLOADS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPayload {
    pub timestamp: String,
    pub url: String,
    pub rating: String,
    pub feedback: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestPayload {
    pub email: String,
    pub domain: String,
    pub path: String,
    pub date: String,
    pub deliverable: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

//
// ─── TRANSPORT ─────────────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// POST `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Transport` if the request could not be sent.
    async fn post_json(&self, endpoint: &Url, body: serde_json::Value)
    -> Result<(), SubmissionError>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &Url,
        body: serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let response = self.client.post(endpoint.clone()).json(&body).send().await?;
        // Endpoints answer opaquely; any status counts as delivered.
        tracing::debug!(status = %response.status(), "submission delivered");
        Ok(())
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default)]
pub struct SubmissionConfig {
    pub feedback_endpoint: Option<Url>,
    pub interest_endpoint: Option<Url>,
    pub user_email: Option<String>,
}

impl SubmissionConfig {
    /// Read `PORTAL_FEEDBACK_URL`, `PORTAL_INTEREST_URL` and `PORTAL_USER_EMAIL`.
    /// Unparseable URLs are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint = |name: &str| {
            env::var(name)
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .and_then(|raw| Url::parse(raw.trim()).ok())
        };
        Self {
            feedback_endpoint: endpoint("PORTAL_FEEDBACK_URL"),
            interest_endpoint: endpoint("PORTAL_INTEREST_URL"),
            user_email: env::var("PORTAL_USER_EMAIL")
                .ok()
                .filter(|raw| !raw.trim().is_empty()),
        }
    }
}

#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    transport: Arc<dyn SubmissionTransport>,
    config: SubmissionConfig,
}

impl SubmissionService {
    #[must_use]
    pub fn new(clock: Clock, transport: Arc<dyn SubmissionTransport>, config: SubmissionConfig) -> Self {
        Self {
            clock,
            transport,
            config,
        }
    }

    #[must_use]
    pub fn http(config: SubmissionConfig) -> Self {
        Self::new(Clock::System, Arc::new(HttpTransport::default()), config)
    }

    #[must_use]
    pub fn feedback_enabled(&self) -> bool {
        self.config.feedback_endpoint.is_some()
    }

    #[must_use]
    pub fn interest_enabled(&self) -> bool {
        self.config.interest_endpoint.is_some()
    }

    #[must_use]
    pub fn feedback_payload(
        &self,
        page: &Url,
        lesson: Option<&ViewId>,
        rating: Option<u8>,
        notes: &str,
    ) -> FeedbackPayload {
        let context = lesson.map(|id| format!(" ({id})")).unwrap_or_default();
        FeedbackPayload {
            timestamp: self.clock.iso_timestamp(),
            url: format!("{page}{context}"),
            rating: rating.map_or_else(|| "N/A".to_string(), |value| value.to_string()),
            feedback: notes.to_string(),
            kind: "content_feedback",
        }
    }

    #[must_use]
    pub fn interest_payload(&self, page: &Url, deliverable: &str) -> InterestPayload {
        InterestPayload {
            email: self
                .config
                .user_email
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string()),
            domain: page.host_str().unwrap_or_default().to_string(),
            path: page.path().to_string(),
            date: self.clock.iso_timestamp(),
            deliverable: deliverable.to_string(),
            kind: "upsell_interest",
        }
    }

    /// Send content feedback for the page (and lesson, if one is loaded).
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::NotConfigured` without an endpoint, or the
    /// transport's error.
    pub async fn submit_feedback(
        &self,
        page: &Url,
        lesson: Option<&ViewId>,
        rating: Option<u8>,
        notes: &str,
    ) -> Result<(), SubmissionError> {
        let endpoint = self
            .config
            .feedback_endpoint
            .as_ref()
            .ok_or(SubmissionError::NotConfigured("feedback"))?;
        let payload = self.feedback_payload(page, lesson, rating, notes);
        self.send(endpoint, serde_json::to_value(payload)?).await
    }

    /// Record interest in a locked deliverable.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::NotConfigured` without an endpoint, or the
    /// transport's error.
    pub async fn capture_interest(&self, page: &Url, deliverable: &str) -> Result<(), SubmissionError> {
        let endpoint = self
            .config
            .interest_endpoint
            .as_ref()
            .ok_or(SubmissionError::NotConfigured("interest"))?;
        let payload = self.interest_payload(page, deliverable);
        self.send(endpoint, serde_json::to_value(payload)?).await
    }

    async fn send(&self, endpoint: &Url, body: serde_json::Value) -> Result<(), SubmissionError> {
        let result = self.transport.post_json(endpoint, body).await;
        if let Err(err) = &result {
            tracing::warn!(endpoint = %endpoint, error = %err, "submission failed");
        }
        result
    }
}
