//! Pending form values and the validated lead record.
//!
//! DESIGN
//! ======
//! `LeadForm` holds whatever the visitor typed and is never validated on
//! keystroke. `LeadForm::validate` evaluates every field independently and
//! either returns an immutable `LeadSubmission` or the complete list of field
//! errors. Each validated field is a newtype whose only constructor is its
//! parser, so a `LeadSubmission` cannot carry an invalid value, including one
//! deserialized from JSON.
//!
//! Values are trimmed before checking; a whitespace-only name is empty.

use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{ErrorKind, FieldError, ValidationErrors};
use crate::field::Field;
use crate::state_code::UsState;

const PHONE_DIGITS: usize = 10;
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// =============================================================================
// FIELD NEWTYPES
// =============================================================================

/// A first or last name. Non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// # Errors
    ///
    /// [`ErrorKind::Required`] when the trimmed value is empty.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorKind::Required);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Exactly ten ASCII digits. No plausibility check: `0000000000` is accepted.
///
/// Input is trimmed first, so `" 5551234567 "` passes and is stored as
/// `5551234567`; inner separators still fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// # Errors
    ///
    /// [`ErrorKind::Required`] when empty, [`ErrorKind::Format`] unless the
    /// value is exactly ten digits with no separators.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorKind::Required);
        }
        if trimmed.len() != PHONE_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorKind::Format);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An address shaped like `<non-space>+@<non-space>+`.
///
/// This is a shape check only: `a@b` passes, and so does `a@b@c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Errors
    ///
    /// [`ErrorKind::Required`] when empty, [`ErrorKind::Format`] when the
    /// value has inner whitespace or no `@` with text on both sides.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorKind::Required);
        }
        if !is_email_shaped(trimmed) {
            return Err(ErrorKind::Format);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(idx, ch)| ch == '@' && idx > 0 && idx + 1 < value.len())
}

/// A calendar date in `YYYY-MM-DD` form. No minimum age is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateOfBirth(Date);

impl DateOfBirth {
    /// # Errors
    ///
    /// [`ErrorKind::Required`] when empty, [`ErrorKind::Format`] when the
    /// value is not a real `YYYY-MM-DD` date.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorKind::Required);
        }
        Date::parse(trimmed, ISO_DATE)
            .map(Self)
            .map_err(|_| ErrorKind::Format)
    }

    /// ISO `YYYY-MM-DD` rendering, as the browser date input emits it.
    #[must_use]
    pub fn to_iso_string(self) -> String {
        self.0
            .format(ISO_DATE)
            .unwrap_or_else(|_| self.0.to_string())
    }
}

fn parse_state(raw: &str) -> Result<UsState, ErrorKind> {
    raw.trim().parse().map_err(|_| ErrorKind::Required)
}

// =============================================================================
// PENDING FORM
// =============================================================================

/// Raw, unvalidated form values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub state: String,
}

impl LeadForm {
    /// Current raw value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::DateOfBirth => &self.date_of_birth,
            Field::State => &self.state,
        }
    }

    /// Store free text for `field`. Never validates.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::State => &mut self.state,
        };
        *slot = value.into();
    }

    /// Validate every field and build the immutable submission.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once, in [`Field`] order.
    pub fn validate(&self) -> Result<LeadSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = check(&mut errors, Field::FirstName, PersonName::parse(&self.first_name));
        let last_name = check(&mut errors, Field::LastName, PersonName::parse(&self.last_name));
        let phone = check(&mut errors, Field::Phone, PhoneNumber::parse(&self.phone));
        let email = check(&mut errors, Field::Email, EmailAddress::parse(&self.email));
        let date_of_birth = check(&mut errors, Field::DateOfBirth, DateOfBirth::parse(&self.date_of_birth));
        let state = check(&mut errors, Field::State, parse_state(&self.state));

        match (first_name, last_name, phone, email, date_of_birth, state) {
            (Some(first_name), Some(last_name), Some(phone), Some(email), Some(date_of_birth), Some(state))
                if errors.is_empty() =>
            {
                Ok(LeadSubmission { first_name, last_name, phone, email, date_of_birth, state })
            }
            _ => Err(errors),
        }
    }
}

fn check<T>(errors: &mut ValidationErrors, field: Field, result: Result<T, ErrorKind>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(kind) => {
            errors.push(FieldError::new(field, kind));
            None
        }
    }
}

// =============================================================================
// VALIDATED SUBMISSION
// =============================================================================

/// A fully validated lead. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "LeadForm", try_from = "LeadForm")]
pub struct LeadSubmission {
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    email: EmailAddress,
    date_of_birth: DateOfBirth,
    state: UsState,
}

impl LeadSubmission {
    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    #[must_use]
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn date_of_birth(&self) -> DateOfBirth {
        self.date_of_birth
    }

    #[must_use]
    pub fn state(&self) -> UsState {
        self.state
    }

    /// Normalized raw values, suitable for the wire or for re-editing.
    #[must_use]
    pub fn to_form(&self) -> LeadForm {
        LeadForm {
            first_name: self.first_name.as_str().to_owned(),
            last_name: self.last_name.as_str().to_owned(),
            phone: self.phone.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            date_of_birth: self.date_of_birth.to_iso_string(),
            state: self.state.code().to_owned(),
        }
    }
}

impl From<LeadSubmission> for LeadForm {
    fn from(lead: LeadSubmission) -> Self {
        lead.to_form()
    }
}

impl TryFrom<LeadForm> for LeadSubmission {
    type Error = ValidationErrors;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
