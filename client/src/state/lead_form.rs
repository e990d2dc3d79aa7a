//! Lead capture form controller.
//!
//! DESIGN
//! ======
//! `LeadFormState` is the whole controller as a plain value: pending field
//! values, the field errors on display, and the submission phase.
//!
//! ```text
//! Editing ──valid submit──▶ Submitting ──sink ok──────▶ Submitted (terminal)
//!    ▲                          │
//!    └──── sink rejected ◀──────┤
//!                               └──sink failed──▶ Failed ──valid submit──▶ Submitting
//! ```
//!
//! The `Submitting` phase doubles as the double-submit guard: `begin_submit`
//! is a no-op unless the form is accepting input, so only one hand-off can be
//! in flight per page. There is no cancellation and no client-side timeout.
//!
//! [`submit`] drives one attempt against any [`FormStore`] (a Leptos signal in
//! the page, a `RefCell` in tests) and any [`LeadSink`].

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use std::cell::RefCell;

use leads::{Field, LeadForm, LeadSubmission, ValidationErrors};
use leptos::prelude::{RwSignal, Update};

use crate::net::api::{LeadSink, SinkError};

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// A validated lead is being handed to the sink.
    Submitting,
    /// The sink failed; values are kept and the visitor may retry.
    Failed(String),
    /// The sink accepted the lead. Terminal.
    Submitted,
}

/// Form controller state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub form: LeadForm,
    pub errors: ValidationErrors,
    pub phase: SubmitPhase,
}

impl LeadFormState {
    /// Whether fields and the submit button are live.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, SubmitPhase::Editing | SubmitPhase::Failed(_))
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    /// Failure banner text, if the last hand-off failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Error message currently shown under `field`.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field).map(leads::FieldError::message)
    }

    /// Store free text for `field`. No validation; clears that field's error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.accepts_input() {
            return;
        }
        self.form.set(field, value);
        self.errors.remove(field);
    }

    /// Validate and, if valid, enter `Submitting`.
    ///
    /// Returns the lead to hand to the sink, or `None` when the form was
    /// invalid (errors are now populated) or a submission is already in
    /// flight or finished.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if !self.accepts_input() {
            return None;
        }
        match self.form.validate() {
            Ok(lead) => {
                self.errors = ValidationErrors::new();
                self.phase = SubmitPhase::Submitting;
                Some(lead)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = SubmitPhase::Editing;
                None
            }
        }
    }

    /// Apply the sink outcome. Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, outcome: Result<(), SinkError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                // The page keeps no reference to the lead once it is handed off.
                self.form = LeadForm::default();
                self.phase = SubmitPhase::Submitted;
            }
            Err(SinkError::Rejected(errors)) if !errors.is_empty() => {
                self.errors = errors;
                self.phase = SubmitPhase::Editing;
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed(err.user_message().to_owned());
            }
        }
    }
}

// =============================================================================
// STORE + DRIVER
// =============================================================================

/// Mutable home for a [`LeadFormState`].
pub trait FormStore {
    /// Run `f` against the state. Returns `None` if the store is gone
    /// (e.g. the owning component was unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R>;
}

impl FormStore for RefCell<LeadFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormStore for RwSignal<LeadFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// What one call to [`submit`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission was already in flight or finished.
    Ignored,
    /// Validation failed; the sink was not called.
    Invalid,
    /// The lead was handed to the sink and its outcome applied.
    Sent,
}

/// Run one submit attempt: validate, hand off, then apply the outcome.
pub async fn submit<S, K>(store: &S, sink: &K) -> SubmitAttempt
where
    S: FormStore + ?Sized,
    K: LeadSink + ?Sized,
{
    let started = store.modify(|state| {
        let was_open = state.accepts_input();
        (was_open, state.begin_submit())
    });
    let lead = match started {
        Some((_, Some(lead))) => lead,
        Some((true, None)) => return SubmitAttempt::Invalid,
        Some((false, None)) | None => return SubmitAttempt::Ignored,
    };

    let outcome = sink.send(&lead).await;
    store.modify(|state| state.finish_submit(outcome));
    SubmitAttempt::Sent
}
