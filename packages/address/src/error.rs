//! Error types for address parsing and vocabulary loading.

use strum_macros::IntoStaticStr;
use thiserror::Error;

/// Why an address line could not be parsed.
///
/// Every failure aborts the parse; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
pub enum AddressError {
    /// The input was empty, whitespace-only, or the literal `"0"`.
    #[error("Address is empty")]
    EmptyInput,

    /// No trailing `STATE ZIP` / `STATE ZIP-EXT` was found.
    #[error("Address must end with a state code and ZIP code (e.g. \"IL 62704\")")]
    MalformedTail,

    /// The trailing two letters are not one of the 51 state codes.
    #[error("Invalid state code: {state}")]
    InvalidState {
        /// The upper-cased state candidate.
        state: String,
    },

    /// The trailing digits are not `NNNNN` or `NNNNN-NNNN`.
    #[error("Invalid ZIP code: {zip}")]
    InvalidZip {
        /// The ZIP candidate as found in the input.
        zip: String,
    },

    /// Nothing precedes the state and ZIP.
    #[error("Address has no street or city before the state and ZIP code")]
    EmptyPrefix,

    /// A comma-less address contains no recognized street suffix.
    #[error("Could not find a street suffix (St, Ave, Rd, ...) in \"{prefix}\"")]
    SuffixNotFound {
        /// The text that was scanned.
        prefix: String,
    },

    /// The city segment is empty.
    #[error("City is missing")]
    EmptyCity,

    /// No street segment was available.
    #[error("Street address is missing")]
    EmptyStreet,

    /// The street candidate does not look like a street address.
    #[error("Invalid street address: \"{street}\"")]
    InvalidStreetAddress {
        /// The rejected street line.
        street: String,
    },

    /// The county-aware parse needs at least street, city, and state/ZIP.
    #[error("Expected at least 3 comma-separated parts (street, city, state ZIP), found {found}")]
    InsufficientParts {
        /// Number of comma-separated parts in the input.
        found: usize,
    },

    /// The last comma-separated segment is not exactly `STATE ZIP`.
    #[error("Last segment must be exactly a state code and ZIP code, found \"{segment}\"")]
    MalformedStateZip {
        /// The rejected segment.
        segment: String,
    },
}

impl AddressError {
    /// Returns the stable, machine-readable name of this error
    /// (e.g. `"InvalidState"`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Errors from loading a street-suffix / unit-indicator vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The vocabulary document is not valid TOML or has the wrong shape.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A table entry is blank.
    #[error("Vocabulary table '{table}' contains an empty entry")]
    EmptyEntry {
        /// Name of the offending table.
        table: &'static str,
    },

    /// A table has no entries at all.
    #[error("Vocabulary table '{table}' is empty")]
    EmptyTable {
        /// Name of the offending table.
        table: &'static str,
    },

    /// The unit-indicator pattern could not be compiled.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
