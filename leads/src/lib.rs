//! Shared lead-capture domain for the landing page funnel.
//!
//! This crate owns the signup field set, the validation rules, the validated
//! [`LeadSubmission`] record and the JSON wire schema used by both `server`
//! and `client`. The browser validates with these rules before sending, and
//! the server runs the exact same rules again before forwarding a lead to the
//! spreadsheet webhook.

pub mod error;
pub mod field;
pub mod state_code;
pub mod submission;
pub mod wire;

pub use error::{ErrorKind, FieldError, ValidationErrors};
pub use field::Field;
pub use state_code::UsState;
pub use submission::{DateOfBirth, EmailAddress, LeadForm, LeadSubmission, PersonName, PhoneNumber};
pub use wire::{FieldErrorBody, LEADS_ENDPOINT, SubmitLeadRequest, SubmitLeadResponse, Variant, WebhookPayload};
