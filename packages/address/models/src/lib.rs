#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Structured US postal address types.
//!
//! These are the plain values produced and consumed by the `us_address`
//! parser: the [`ParsedAddress`] record returned from a successful parse,
//! the [`AddressFields`] accepted by the formatter, and the [`UsState`]
//! enumeration of the 50 states + DC.

pub mod state;

use serde::{Deserialize, Serialize};

pub use state::UsState;

/// A successfully parsed single-line address.
///
/// `address1`, `city` and `zip` are always non-empty. `address2` and
/// `county` are either absent or non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Primary street line (e.g. "123 Main St").
    pub address1: String,
    /// Secondary/unit line (e.g. "APT 4B", "#12").
    pub address2: Option<String>,
    /// City name.
    pub city: String,
    /// Two-letter state code.
    pub state: UsState,
    /// Five-digit ZIP or ZIP+4 (`NNNNN` / `NNNNN-NNNN`).
    pub zip: String,
    /// County name. Only populated by the county-aware parse.
    pub county: Option<String>,
}

impl ParsedAddress {
    /// Converts this record into the loosely-typed fields the formatter
    /// accepts.
    #[must_use]
    pub fn to_fields(&self) -> AddressFields {
        AddressFields {
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.code().to_string(),
            zip: self.zip.clone(),
        }
    }
}

/// Address fields to be assembled into a single line.
///
/// Nothing here is validated. An empty string means the field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressFields {
    /// Primary street line.
    pub address1: String,
    /// Secondary/unit line.
    pub address2: Option<String>,
    /// City name.
    pub city: String,
    /// State code (not checked against [`UsState`]).
    pub state: String,
    /// ZIP code (not format-checked).
    pub zip: String,
}

impl From<&ParsedAddress> for AddressFields {
    fn from(address: &ParsedAddress) -> Self {
        address.to_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield() -> ParsedAddress {
        ParsedAddress {
            address1: "123 Main St".to_string(),
            address2: None,
            city: "Springfield".to_string(),
            state: UsState::Illinois,
            zip: "62704".to_string(),
            county: None,
        }
    }

    #[test]
    fn serializes_absent_fields_as_null() {
        let json = serde_json::to_value(springfield()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address1": "123 Main St",
                "address2": null,
                "city": "Springfield",
                "state": "IL",
                "zip": "62704",
                "county": null,
            })
        );
    }

    #[test]
    fn converts_to_fields() {
        let fields = AddressFields::from(&springfield());
        assert_eq!(fields.state, "IL");
        assert_eq!(fields.address1, "123 Main St");
        assert_eq!(fields.address2, None);
    }

    #[test]
    fn fields_deserialize_with_missing_keys() {
        let fields: AddressFields =
            serde_json::from_str(r#"{"city": "Springfield", "state": "IL"}"#).unwrap();
        assert_eq!(
            fields,
            AddressFields {
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                ..AddressFields::default()
            }
        );
    }
}
