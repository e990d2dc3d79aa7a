//! JSON wire schema between browser, relay server and webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser → server: `POST /api/leads` with [`SubmitLeadRequest`]. The lead is
//! sent as raw [`LeadForm`] values so the server re-validates with the same
//! rules instead of trusting the client.
//!
//! Server → browser: [`SubmitLeadResponse`], carrying per-field errors when
//! the server rejects the lead.
//!
//! Server → webhook: [`WebhookPayload`], the six fields flattened alongside
//! attribution and a timestamp, one JSON object per spreadsheet row.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{ErrorKind, FieldError, ValidationErrors};
use crate::field::Field;
use crate::submission::{LeadForm, LeadSubmission};

/// Path of the lead relay endpoint.
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Which landing page variant produced the lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Arcade,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Arcade];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Arcade => "arcade",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Body of `POST /api/leads`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLeadRequest {
    pub lead: LeadForm,
    #[serde(default)]
    pub variant: Variant,
}

impl SubmitLeadRequest {
    #[must_use]
    pub fn new(lead: &LeadSubmission, variant: Variant) -> Self {
        Self { lead: lead.to_form(), variant }
    }
}

/// One field error as rendered for API consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(error: &FieldError) -> Self {
        Self { field: error.field, kind: error.kind, message: error.message().to_owned() }
    }
}

/// Response body of `POST /api/leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLeadResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitLeadResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, errors: Vec::new(), message: None }
    }

    #[must_use]
    pub fn rejected(errors: &ValidationErrors) -> Self {
        Self {
            ok: false,
            errors: errors.iter().map(FieldErrorBody::from).collect(),
            message: Some(errors.to_string()),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { ok: false, errors: Vec::new(), message: Some(message.into()) }
    }

    /// Field errors carried by a rejection, in field order.
    #[must_use]
    pub fn validation_errors(&self) -> ValidationErrors {
        self.errors
            .iter()
            .map(|body| FieldError::new(body.field, body.kind))
            .collect()
    }
}

/// JSON object posted to the spreadsheet/automation webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(flatten)]
    pub lead: LeadSubmission,
    pub variant: Variant,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl WebhookPayload {
    #[must_use]
    pub fn new(lead: LeadSubmission, variant: Variant, submitted_at: OffsetDateTime) -> Self {
        Self { lead, variant, submitted_at }
    }
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;
