//! The fifty US state postal codes accepted by the signup form.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! us_states {
    ($($variant:ident => $code:literal, $name:literal;)*) => {
        /// A US state, identified on the wire by its two-letter postal code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum UsState {
            $(#[doc = $name] $variant,)*
        }

        impl UsState {
            /// All fifty states, in the order the form lists them.
            pub const ALL: [UsState; 50] = [$(UsState::$variant,)*];

            /// Two-letter postal code, e.g. `"CA"`.
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $(UsState::$variant => $code,)*
                }
            }

            /// Full state name, e.g. `"California"`.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(UsState::$variant => $name,)*
                }
            }
        }
    };
}

us_states! {
    Alabama => "AL", "Alabama";
    Alaska => "AK", "Alaska";
    Arizona => "AZ", "Arizona";
    Arkansas => "AR", "Arkansas";
    California => "CA", "California";
    Colorado => "CO", "Colorado";
    Connecticut => "CT", "Connecticut";
    Delaware => "DE", "Delaware";
    Florida => "FL", "Florida";
    Georgia => "GA", "Georgia";
    Hawaii => "HI", "Hawaii";
    Idaho => "ID", "Idaho";
    Illinois => "IL", "Illinois";
    Indiana => "IN", "Indiana";
    Iowa => "IA", "Iowa";
    Kansas => "KS", "Kansas";
    Kentucky => "KY", "Kentucky";
    Louisiana => "LA", "Louisiana";
    Maine => "ME", "Maine";
    Maryland => "MD", "Maryland";
    Massachusetts => "MA", "Massachusetts";
    Michigan => "MI", "Michigan";
    Minnesota => "MN", "Minnesota";
    Mississippi => "MS", "Mississippi";
    Missouri => "MO", "Missouri";
    Montana => "MT", "Montana";
    Nebraska => "NE", "Nebraska";
    Nevada => "NV", "Nevada";
    NewHampshire => "NH", "New Hampshire";
    NewJersey => "NJ", "New Jersey";
    NewMexico => "NM", "New Mexico";
    NewYork => "NY", "New York";
    NorthCarolina => "NC", "North Carolina";
    NorthDakota => "ND", "North Dakota";
    Ohio => "OH", "Ohio";
    Oklahoma => "OK", "Oklahoma";
    Oregon => "OR", "Oregon";
    Pennsylvania => "PA", "Pennsylvania";
    RhodeIsland => "RI", "Rhode Island";
    SouthCarolina => "SC", "South Carolina";
    SouthDakota => "SD", "South Dakota";
    Tennessee => "TN", "Tennessee";
    Texas => "TX", "Texas";
    Utah => "UT", "Utah";
    Vermont => "VT", "Vermont";
    Virginia => "VA", "Virginia";
    Washington => "WA", "Washington";
    WestVirginia => "WV", "West Virginia";
    Wisconsin => "WI", "Wisconsin";
    Wyoming => "WY", "Wyoming";
}

/// Returned when a string is not one of the fifty postal codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown US state code: {0:?}")]
pub struct UnknownState(pub String);

impl FromStr for UsState {
    type Err = UnknownState;

    /// Codes are matched exactly; the form's `<select>` only ever emits
    /// upper-case codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == s)
            .ok_or_else(|| UnknownState(s.to_owned()))
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UsState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UsState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "state_code_test.rs"]
mod tests;
