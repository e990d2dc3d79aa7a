//! Signup form field identifiers.
//!
//! DESIGN
//! ======
//! Declaration order is the reporting order: validation walks fields in this
//! order so error lists are deterministic no matter which inputs were bad.

use serde::{Deserialize, Serialize};

/// One of the six inputs on the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "dob")]
    DateOfBirth,
    #[serde(rename = "state")]
    State,
}

impl Field {
    /// Every field, in reporting order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Email,
        Field::DateOfBirth,
        Field::State,
    ];

    /// JSON key used on the wire and as the HTML `name` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::DateOfBirth => "dob",
            Self::State => "state",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::DateOfBirth => "Date of birth",
            Self::State => "State",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod tests;
