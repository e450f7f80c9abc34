#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic parser for single-line US postal addresses.
//!
//! Splits free-form input like `"500 Elm Avenue Apt 4B Metropolis NY 10001"`
//! into street, unit, city, state, and ZIP, and formats structured fields
//! back into a single line. Parsing is deterministic and offline: no address
//! is checked for deliverability.
//!
//! A parse runs in stages:
//!
//! 1. [`normalize`]: whitespace collapse and abbreviation period stripping
//! 2. [`tail`]: the trailing `STATE ZIP` / `STATE ZIP-EXT`
//! 3. [`split`]: street/city split, by street suffix when the line has no
//!    commas, by comma segments otherwise
//! 4. [`unit`]: secondary unit designations (`APT 4B`, `#12`)
//!
//! [`format`] is the reverse path.
//!
//! Street suffixes and unit indicators come from a [`Vocabulary`]; the free
//! functions in this module use [`Vocabulary::builtin()`], while
//! [`AddressParser`] accepts any vocabulary.

pub mod error;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod split;
pub mod street;
pub mod tail;
pub mod unit;
pub mod vocabulary;

pub use error::{AddressError, VocabularyError};
pub use format::{format_address, format_parsed};
pub use parser::AddressParser;
pub use tail::{is_valid_state, is_valid_zip_code};
pub use us_address_models::{AddressFields, ParsedAddress, UsState};
pub use vocabulary::Vocabulary;

/// Parses a single-line address with the builtin vocabulary.
///
/// See [`AddressParser::parse`].
///
/// # Errors
///
/// Returns an [`AddressError`] describing the first stage that failed.
pub fn parse_address_string(raw: &str) -> Result<ParsedAddress, AddressError> {
    AddressParser::default().parse(raw)
}

/// Parses a comma-separated address that may include a county, with the
/// builtin vocabulary.
///
/// See [`AddressParser::parse_with_county`].
///
/// # Errors
///
/// Returns an [`AddressError`] describing the first stage that failed.
pub fn parse_address_string_with_county(raw: &str) -> Result<ParsedAddress, AddressError> {
    AddressParser::default().parse_with_county(raw)
}

/// All 51 valid state codes (50 states + DC), alphabetical.
#[must_use]
pub const fn get_valid_states() -> &'static [&'static str] {
    us_address_models::state::STATE_CODES
}
