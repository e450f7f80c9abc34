//! Splitting the text before the state/ZIP into street, unit, and city.
//!
//! Two strategies exist:
//!
//! * [`split_no_comma`] for a prefix with no commas, where the street line
//!   ends at the rightmost recognized street suffix and the rest is the city
//! * [`split_comma_parts`] for the comma-separated case, where the caller
//!   has already removed the city (and county) segments

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AddressError;
use crate::street::is_valid_street_address;
use crate::unit::{extract_unit, normalize_unit};
use crate::vocabulary::Vocabulary;

/// A unit number that follows a unit indicator stranded in the city:
/// 1-10 word characters or hyphens (the digit requirement is checked
/// separately).
static UNIT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]{1,10}$").expect("valid regex"));

/// Street, unit, and city recovered from a comma-less prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyParts {
    /// Primary street line.
    pub address1: String,
    /// Secondary line, casing-normalized.
    pub address2: Option<String>,
    /// City name.
    pub city: String,
}

/// Street and unit recovered from comma-separated street segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetParts {
    /// Primary street line.
    pub address1: String,
    /// Secondary line, casing-normalized.
    pub address2: Option<String>,
}

/// Splits a prefix without commas into street, unit, and city.
///
/// Tokens are scanned from the right down to (but not including) the first
/// token for a street suffix. Everything through the suffix is the street;
/// the rest is the city. A unit indicator heading the city (e.g. the `Apt`
/// of `"... Avenue Apt 4B Metropolis"`) is moved into the unit, along with
/// the following token when that looks like a unit number.
///
/// # Errors
///
/// * [`AddressError::SuffixNotFound`] if no token past the first is a suffix
/// * [`AddressError::EmptyCity`] if no city tokens remain
/// * [`AddressError::InvalidStreetAddress`] if the street line fails
///   [`is_valid_street_address`]
pub fn split_no_comma(vocabulary: &Vocabulary, prefix: &str) -> Result<BodyParts, AddressError> {
    let tokens: Vec<&str> = prefix.split_whitespace().collect();

    let suffix_idx = (1..tokens.len())
        .rev()
        .find(|&i| vocabulary.is_street_suffix(tokens[i]))
        .ok_or_else(|| AddressError::SuffixNotFound {
            prefix: prefix.to_string(),
        })?;

    let street_line = tokens[..=suffix_idx].join(" ");
    let mut city_tokens = &tokens[suffix_idx + 1..];
    if city_tokens.is_empty() {
        return Err(AddressError::EmptyCity);
    }

    log::trace!(
        "split_no_comma: suffix {:?} at token {suffix_idx} of {prefix:?}",
        tokens[suffix_idx]
    );

    let split = extract_unit(vocabulary, &street_line);
    let mut unit = split.unit.map(str::to_string);

    if let Some((&indicator, rest)) = city_tokens.split_first()
        && vocabulary.starts_with_unit_indicator(indicator)
    {
        let mut stranded = vec![indicator];
        city_tokens = rest;

        if let Some((&number, rest)) = city_tokens.split_first()
            && is_unit_number(number)
        {
            stranded.push(number);
            city_tokens = rest;
        }

        let stranded = stranded.join(" ");
        log::trace!("split_no_comma: moved {stranded:?} from city into unit");

        unit = Some(match unit {
            Some(existing) => format!("{existing} {stranded}"),
            None => stranded,
        });

        if city_tokens.is_empty() {
            return Err(AddressError::EmptyCity);
        }
    }

    if !is_valid_street_address(vocabulary, split.street) {
        return Err(AddressError::InvalidStreetAddress {
            street: split.street.to_string(),
        });
    }

    Ok(BodyParts {
        address1: split.street.to_string(),
        address2: normalize_unit(unit.as_deref()),
        city: city_tokens.join(" "),
    })
}

/// Builds the street and unit lines from comma-separated segments.
///
/// The first segment is the street (validated, then unit-split); any further
/// segments are joined with spaces and appended to the unit.
///
/// # Errors
///
/// * [`AddressError::EmptyStreet`] if `parts` is empty
/// * [`AddressError::InvalidStreetAddress`] if the first segment fails
///   [`is_valid_street_address`]
pub fn split_comma_parts(
    vocabulary: &Vocabulary,
    parts: &[&str],
) -> Result<StreetParts, AddressError> {
    let Some((&street, extra)) = parts.split_first() else {
        return Err(AddressError::EmptyStreet);
    };

    if !is_valid_street_address(vocabulary, street) {
        return Err(AddressError::InvalidStreetAddress {
            street: street.to_string(),
        });
    }

    let split = extract_unit(vocabulary, street);

    let extra = extra
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let unit = match (split.unit, extra.is_empty()) {
        (Some(unit), false) => Some(format!("{unit} {extra}")),
        (Some(unit), true) => Some(unit.to_string()),
        (None, false) => Some(extra),
        (None, true) => None,
    };

    Ok(StreetParts {
        address1: split.street.to_string(),
        address2: normalize_unit(unit.as_deref()),
    })
}

fn is_unit_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) && UNIT_NUMBER_RE.is_match(token)
}
