//! Lead forwarding to the downstream spreadsheet/automation webhook.
//!
//! DESIGN
//! ======
//! Route handlers depend on the [`LeadForwarder`] trait only. Production uses
//! [`WebhookForwarder`] when `LEAD_WEBHOOK_URL` is configured and falls back
//! to [`LogForwarder`] otherwise, so a local run still accepts leads and
//! prints them instead of dropping them.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx webhook responses become [`ForwardError`].
//! `retryable()` marks the ones worth surfacing as "try again" to the visitor.

use async_trait::async_trait;
use leads::WebhookPayload;

use crate::config::WebhookConfig;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ForwardError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The webhook request never produced a response.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// The webhook answered with a non-success status.
    #[error("webhook returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl ForwardError {
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

/// Destination for accepted leads. Enables mocking in tests.
#[async_trait]
pub trait LeadForwarder: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver one accepted lead.
    ///
    /// # Errors
    ///
    /// Returns a [`ForwardError`] if the lead could not be delivered.
    async fn forward(&self, payload: &WebhookPayload) -> Result<(), ForwardError>;
}

// =============================================================================
// WEBHOOK
// =============================================================================

pub struct WebhookForwarder {
    http: reqwest::Client,
    url: reqwest::Url,
}

impl WebhookForwarder {
    /// # Errors
    ///
    /// Returns [`ForwardError::HttpClientBuild`] if reqwest rejects the
    /// client settings.
    pub fn new(config: WebhookConfig) -> Result<Self, ForwardError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ForwardError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url })
    }

    #[must_use]
    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

#[async_trait]
impl LeadForwarder for WebhookForwarder {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn forward(&self, payload: &WebhookPayload) -> Result<(), ForwardError> {
        let response = self
            .http
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| ForwardError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ForwardError::Status { status, body: truncate(&body, MAX_ERROR_BODY_CHARS) })
    }
}

const MAX_ERROR_BODY_CHARS: usize = 512;

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_owned(),
    }
}

// =============================================================================
// LOG ONLY
// =============================================================================

/// Accepts every lead and writes it to the log.
pub struct LogForwarder;

#[async_trait]
impl LeadForwarder for LogForwarder {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn forward(&self, payload: &WebhookPayload) -> Result<(), ForwardError> {
        let json = serde_json::to_string(payload).unwrap_or_default();
        tracing::info!(variant = %payload.variant, lead = %json, "lead accepted (no webhook configured)");
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod tests;
