//! Lead submission sink and its browser HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the sink reports a network error, since a submission
//! can only originate from a hydrated page.
//!
//! ERROR HANDLING
//! ==============
//! Every relay outcome maps to a [`SinkError`] variant so the form controller
//! can surface failure instead of assuming the hand-off always succeeds.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use leads::SubmitLeadResponse;
use leads::{LeadSubmission, ValidationErrors, Variant};

/// Why the hand-off to the lead sink failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The request never got a usable response.
    #[error("network error: {0}")]
    Network(String),
    /// The relay re-validated the lead and rejected these fields.
    #[error("submission rejected: {0}")]
    Rejected(ValidationErrors),
    /// Too many submissions from this visitor.
    #[error("too many attempts")]
    RateLimited,
    /// The relay or the webhook behind it failed.
    #[error("signup service error {status}: {message}")]
    Upstream { status: u16, message: String },
}

impl SinkError {
    /// Banner text shown to the visitor.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "We couldn't reach the signup service. Check your connection and try again.",
            Self::Rejected(_) => "Please fix the highlighted fields.",
            Self::RateLimited => "Too many attempts. Please wait a minute and try again.",
            Self::Upstream { .. } => "Signup is temporarily unavailable. Please try again shortly.",
        }
    }
}

/// Destination for validated leads.
#[async_trait::async_trait(?Send)]
pub trait LeadSink {
    /// Hand one validated lead to the external system.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the lead was not accepted.
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SinkError>;
}

/// Posts leads to the relay at [`leads::LEADS_ENDPOINT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpLeadSink {
    pub variant: Variant,
}

impl HttpLeadSink {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadSink for HttpLeadSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SinkError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = leads::SubmitLeadRequest::new(lead, self.variant);
            let resp = gloo_net::http::Request::post(leads::LEADS_ENDPOINT)
                .json(&payload)
                .map_err(|e| SinkError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SinkError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.json::<SubmitLeadResponse>().await.ok();
            interpret_response(status, body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lead;
            Err(SinkError::Network("not available on server".to_owned()))
        }
    }
}

/// Map a relay status + optional JSON body to a sink outcome.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: Option<SubmitLeadResponse>) -> Result<(), SinkError> {
    match (status, body) {
        (200..=299, Some(body)) if body.ok => Ok(()),
        (200..=299, None) => Ok(()),
        (429, _) => Err(SinkError::RateLimited),
        (400 | 422, Some(body)) if !body.errors.is_empty() => Err(SinkError::Rejected(body.validation_errors())),
        (status, body) => Err(SinkError::Upstream {
            status,
            message: body
                .and_then(|b| b.message)
                .unwrap_or_else(|| upstream_failed_message(status)),
        }),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn upstream_failed_message(status: u16) -> String {
    format!("lead submission failed: {status}")
}
