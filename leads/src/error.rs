//! Field-scoped validation errors.
//!
//! Errors are local and recoverable: the visitor fixes the input and submits
//! again. They are collected per field instead of aborting on the first one.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The field is empty (or, for the state, not a recognized code).
    Required,
    /// The field has a value with the wrong shape.
    Format,
}

/// A single failed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{}: {}", .field.label(), describe(.field, .kind))]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn new(field: Field, kind: ErrorKind) -> Self {
        Self { field, kind }
    }

    #[must_use]
    pub fn required(field: Field) -> Self {
        Self::new(field, ErrorKind::Required)
    }

    #[must_use]
    pub fn format(field: Field) -> Self {
        Self::new(field, ErrorKind::Format)
    }

    /// Short message shown under the input.
    #[must_use]
    pub fn message(&self) -> &'static str {
        describe(&self.field, &self.kind)
    }
}

fn describe(field: &Field, kind: &ErrorKind) -> &'static str {
    match (kind, field) {
        (ErrorKind::Required, _) => "Required",
        (ErrorKind::Format, Field::Phone) => "10 digits",
        (ErrorKind::Format, Field::Email) => "Invalid email",
        (ErrorKind::Format, Field::DateOfBirth) => "Invalid date",
        (ErrorKind::Format, _) => "Invalid value",
    }
}

/// All field errors from one validation pass, ordered by [`Field`].
///
/// Holds at most one error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier error for the same field.
    pub fn push(&mut self, error: FieldError) {
        match self.0.binary_search_by_key(&error.field, |e| e.field) {
            Ok(idx) => self.0[idx] = error,
            Err(idx) => self.0.insert(idx, error),
        }
    }

    /// Drop the error for `field`, if any. Returns whether one was removed.
    pub fn remove(&mut self, field: Field) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e.field != field);
        self.0.len() != before
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Fields that failed, in reporting order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
