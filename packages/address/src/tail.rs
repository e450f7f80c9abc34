//! Extraction and validation of the trailing `STATE ZIP` of an address line.

use std::sync::LazyLock;

use regex::Regex;
use us_address_models::UsState;

use crate::error::AddressError;

/// Two letters, whitespace, and a ZIP or ZIP+4 at the very end of a line.
static TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{2})\s+([0-9]{5}(?:-[0-9]{4})?)$").expect("valid regex")
});

/// A segment consisting of nothing but `STATE ZIP`.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2})\s+([0-9]{5}(?:-[0-9]{4})?)$").expect("valid regex")
});

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("valid regex"));

/// An address line split into everything before the state, and the
/// validated state and ZIP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateZipTail<'a> {
    /// Text before the state, with trailing commas and spaces removed.
    pub prefix: &'a str,
    /// The validated state.
    pub state: UsState,
    /// The validated ZIP (`NNNNN` or `NNNNN-NNNN`).
    pub zip: &'a str,
}

/// Whether `zip` is exactly `NNNNN` or `NNNNN-NNNN` (ASCII digits).
#[must_use]
pub fn is_valid_zip_code(zip: &str) -> bool {
    ZIP_RE.is_match(zip)
}

/// Whether `state` is one of the 51 two-letter codes, ignoring case.
#[must_use]
pub fn is_valid_state(state: &str) -> bool {
    UsState::from_code(state).is_some()
}

/// Splits the trailing `STATE ZIP` off a normalized address line.
///
/// # Errors
///
/// * [`AddressError::MalformedTail`] if the line does not end in `XX NNNNN`
///   or `XX NNNNN-NNNN`
/// * [`AddressError::InvalidState`] if the two letters are not a state code
/// * [`AddressError::InvalidZip`] if the ZIP fails validation
/// * [`AddressError::EmptyPrefix`] if nothing (or only `"0"`) precedes the
///   state
pub fn extract_state_zip(line: &str) -> Result<StateZipTail<'_>, AddressError> {
    let captures = TAIL_RE.captures(line).ok_or(AddressError::MalformedTail)?;

    let (Some(whole), Some(state), Some(zip)) = (captures.get(0), captures.get(1), captures.get(2))
    else {
        return Err(AddressError::MalformedTail);
    };

    let (state, zip) = validate_state_zip(state.as_str(), zip.as_str())?;

    let prefix = line[..whole.start()].trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    if prefix.is_empty() || prefix == "0" {
        return Err(AddressError::EmptyPrefix);
    }

    Ok(StateZipTail { prefix, state, zip })
}

/// Parses a segment that must be exactly `STATE ZIP` (as the last
/// comma-separated part of a county-aware address).
///
/// # Errors
///
/// * [`AddressError::MalformedStateZip`] if the segment has anything other
///   than a two-letter code, whitespace, and a ZIP
/// * [`AddressError::InvalidState`] / [`AddressError::InvalidZip`] as for
///   [`extract_state_zip`]
pub fn parse_state_zip_segment(segment: &str) -> Result<(UsState, &str), AddressError> {
    let malformed = || AddressError::MalformedStateZip {
        segment: segment.to_string(),
    };

    let captures = SEGMENT_RE.captures(segment).ok_or_else(malformed)?;
    let (Some(state), Some(zip)) = (captures.get(1), captures.get(2)) else {
        return Err(malformed());
    };

    validate_state_zip(state.as_str(), zip.as_str())
}

fn validate_state_zip<'a>(state: &str, zip: &'a str) -> Result<(UsState, &'a str), AddressError> {
    let state = state.to_uppercase();
    let Some(parsed) = UsState::from_code(&state) else {
        return Err(AddressError::InvalidState { state });
    };

    // The capture pattern already constrains the ZIP; this check stays so
    // loosening that pattern cannot bypass validation.
    if !is_valid_zip_code(zip) {
        return Err(AddressError::InvalidZip {
            zip: zip.to_string(),
        });
    }

    Ok((parsed, zip))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_state_and_zip() {
        let tail = extract_state_zip("123 Main St Springfield IL 62704").unwrap();
        assert_eq!(
            tail,
            StateZipTail {
                prefix: "123 Main St Springfield",
                state: UsState::Illinois,
                zip: "62704",
            }
        );
    }

    #[test]
    fn extracts_zip_plus_four_and_trims_commas() {
        let tail =
            extract_state_zip("1600 Pennsylvania Ave NW, Washington, dc 20500-0003").unwrap();
        assert_eq!(tail.prefix, "1600 Pennsylvania Ave NW, Washington");
        assert_eq!(tail.state, UsState::DistrictOfColumbia);
        assert_eq!(tail.zip, "20500-0003");
    }

    #[test]
    fn missing_tail_is_malformed() {
        assert_eq!(
            extract_state_zip("123 Main St Springfield"),
            Err(AddressError::MalformedTail)
        );
        assert_eq!(
            extract_state_zip("123 Main St Springfield IL 6270"),
            Err(AddressError::MalformedTail)
        );
        assert_eq!(
            extract_state_zip("123 Main St Springfield IL 62704 USA"),
            Err(AddressError::MalformedTail)
        );
    }

    #[test]
    fn unknown_state_is_invalid() {
        assert_eq!(
            extract_state_zip("123 Main St Springfield zz 62704"),
            Err(AddressError::InvalidState {
                state: "ZZ".to_string()
            })
        );
    }

    #[test]
    fn empty_or_zero_prefix() {
        assert_eq!(
            extract_state_zip("IL 62704"),
            Err(AddressError::EmptyPrefix)
        );
        assert_eq!(
            extract_state_zip(", IL 62704"),
            Err(AddressError::EmptyPrefix)
        );
        assert_eq!(
            extract_state_zip("0 IL 62704"),
            Err(AddressError::EmptyPrefix)
        );
    }

    #[test]
    fn segment_must_be_exact() {
        assert_eq!(
            parse_state_zip_segment("mo 65804"),
            Ok((UsState::Missouri, "65804"))
        );
        assert_eq!(
            parse_state_zip_segment("Greene MO 65804"),
            Err(AddressError::MalformedStateZip {
                segment: "Greene MO 65804".to_string()
            })
        );
        assert_eq!(
            parse_state_zip_segment("XX 65804"),
            Err(AddressError::InvalidState {
                state: "XX".to_string()
            })
        );
    }

    #[test]
    fn zip_validation() {
        assert!(is_valid_zip_code("62704"));
        assert!(is_valid_zip_code("20500-0003"));
        assert!(!is_valid_zip_code("2050-00003"));
        assert!(!is_valid_zip_code("62704-"));
        assert!(!is_valid_zip_code(" 62704"));
        assert!(!is_valid_zip_code("6270a"));
    }

    #[test]
    fn state_validation() {
        assert!(is_valid_state("CA"));
        assert!(is_valid_state("dc"));
        assert!(!is_valid_state("ZZ"));
        assert!(!is_valid_state("C"));
    }
}
