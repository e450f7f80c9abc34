//! The two parse entry points, tying the stages together.

use us_address_models::ParsedAddress;

use crate::error::AddressError;
use crate::normalize::normalize;
use crate::split::{split_comma_parts, split_no_comma};
use crate::tail::{extract_state_zip, parse_state_zip_segment};
use crate::vocabulary::Vocabulary;

/// Parses address lines against a borrowed [`Vocabulary`].
///
/// Holds no state beyond the vocabulary reference, so it is `Copy` and can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct AddressParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl Default for AddressParser<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::builtin())
    }
}

impl<'a> AddressParser<'a> {
    /// Creates a parser using `vocabulary` for suffix and unit detection.
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this parser matches against.
    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Normalizes `raw` with this parser's vocabulary.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        normalize(self.vocabulary, raw)
    }

    /// Parses a single-line address. The county is never populated.
    ///
    /// The trailing `STATE ZIP` is split off first. If the remaining prefix
    /// has no commas, the street/city boundary is found by street suffix;
    /// otherwise the last comma-separated segment is the city and the rest
    /// form the street and unit lines.
    ///
    /// # Errors
    ///
    /// * [`AddressError::EmptyInput`] for blank input or `"0"`
    /// * any error from [`extract_state_zip`], [`split_no_comma`], or
    ///   [`split_comma_parts`]
    /// * [`AddressError::EmptyCity`] if the city segment is blank
    pub fn parse(&self, raw: &str) -> Result<ParsedAddress, AddressError> {
        let line = self.normalize_non_empty(raw)?;
        let tail = extract_state_zip(&line)?;

        let parts: Vec<&str> = tail.prefix.split(',').map(str::trim).collect();

        let (address1, address2, city) = if let [prefix] = parts.as_slice() {
            log::trace!("parse: no commas in {prefix:?}, splitting on street suffix");
            let body = split_no_comma(self.vocabulary, prefix)?;
            (body.address1, body.address2, body.city)
        } else {
            log::trace!("parse: {} comma-separated parts", parts.len());
            let Some((&city, street_parts)) = parts.split_last() else {
                return Err(AddressError::EmptyCity);
            };
            if city.is_empty() {
                return Err(AddressError::EmptyCity);
            }
            let street = split_comma_parts(self.vocabulary, street_parts)?;
            (street.address1, street.address2, city.to_string())
        };

        Ok(ParsedAddress {
            address1,
            address2,
            city,
            state: tail.state,
            zip: tail.zip.to_string(),
            county: None,
        })
    }

    /// Parses a comma-separated address that may name a county between the
    /// city and the state, e.g. `"123 Main St, Springfield, Greene, MO 65804"`.
    ///
    /// The last segment must be exactly `STATE ZIP`. With three or more
    /// segments left before it, the last two are county and city; otherwise
    /// only the city is taken.
    ///
    /// # Errors
    ///
    /// * [`AddressError::EmptyInput`] for blank input or `"0"`
    /// * [`AddressError::InsufficientParts`] for fewer than 3 segments
    /// * any error from [`parse_state_zip_segment`] or [`split_comma_parts`]
    /// * [`AddressError::EmptyCity`] if the city segment is blank
    pub fn parse_with_county(&self, raw: &str) -> Result<ParsedAddress, AddressError> {
        let line = self.normalize_non_empty(raw)?;

        let mut parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(AddressError::InsufficientParts { found: parts.len() });
        }

        let state_zip = parts
            .pop()
            .ok_or(AddressError::InsufficientParts { found: 0 })?;
        let (state, zip) = parse_state_zip_segment(state_zip)?;

        let county = if parts.len() >= 3 { parts.pop() } else { None };
        let city = parts.pop().unwrap_or_default();
        if city.is_empty() {
            return Err(AddressError::EmptyCity);
        }

        log::trace!("parse_with_county: city={city:?} county={county:?} street={parts:?}");

        let street = split_comma_parts(self.vocabulary, &parts)?;

        Ok(ParsedAddress {
            address1: street.address1,
            address2: street.address2,
            city: city.to_string(),
            state,
            zip: zip.to_string(),
            county: county.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    fn normalize_non_empty(self, raw: &str) -> Result<String, AddressError> {
        let line = self.normalize(raw);
        if line.is_empty() || line == "0" {
            return Err(AddressError::EmptyInput);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use us_address_models::UsState;

    use super::*;

    fn parse(raw: &str) -> Result<ParsedAddress, AddressError> {
        AddressParser::default().parse(raw)
    }

    fn parse_with_county(raw: &str) -> Result<ParsedAddress, AddressError> {
        AddressParser::default().parse_with_county(raw)
    }

    #[test]
    fn parses_comma_less_address() {
        assert_eq!(
            parse("123 Main St Springfield IL 62704"),
            Ok(ParsedAddress {
                address1: "123 Main St".to_string(),
                address2: None,
                city: "Springfield".to_string(),
                state: UsState::Illinois,
                zip: "62704".to_string(),
                county: None,
            })
        );
    }

    #[test]
    fn parses_stranded_apartment() {
        let parsed = parse("500 Elm Avenue Apt 4B Metropolis NY 10001").unwrap();
        assert_eq!(parsed.address1, "500 Elm Avenue");
        assert_eq!(parsed.address2.as_deref(), Some("APT 4B"));
        assert_eq!(parsed.city, "Metropolis");
        assert_eq!(parsed.state, UsState::NewYork);
    }

    #[test]
    fn keeps_hash_unit_casing() {
        let parsed = parse("77 Broadway St #12 Gotham NJ 07001").unwrap();
        assert_eq!(parsed.address1, "77 Broadway St");
        assert_eq!(parsed.address2.as_deref(), Some("#12"));
        assert_eq!(parsed.city, "Gotham");
        assert_eq!(parsed.zip, "07001");
    }

    #[test]
    fn parses_comma_address_with_zip_plus_four() {
        assert_eq!(
            parse("1600 Pennsylvania Avenue NW, Washington, DC 20500-0003"),
            Ok(ParsedAddress {
                address1: "1600 Pennsylvania Avenue NW".to_string(),
                address2: None,
                city: "Washington".to_string(),
                state: UsState::DistrictOfColumbia,
                zip: "20500-0003".to_string(),
                county: None,
            })
        );
    }

    #[test]
    fn comma_address_with_unit_segment() {
        assert_eq!(
            parse("1 Infinite Loop, suite 100, Cupertino, ca 95014"),
            Ok(ParsedAddress {
                address1: "1 Infinite Loop".to_string(),
                address2: Some("SUITE 100".to_string()),
                city: "Cupertino".to_string(),
                state: UsState::California,
                zip: "95014".to_string(),
                county: None,
            })
        );
    }

    #[test]
    fn normalizes_periods_before_parsing() {
        let parsed = parse("  123  Main St.,  Springfield , Il. 62704. ").unwrap();
        assert_eq!(parsed.address1, "123 Main St");
        assert_eq!(parsed.city, "Springfield");
        assert_eq!(parsed.state, UsState::Illinois);
    }

    #[test]
    fn plain_parse_never_sets_county() {
        let parsed = parse("123 Main St, Springfield, Greene, MO 65804").unwrap();
        assert_eq!(parsed.county, None);
        assert_eq!(parsed.city, "Greene");
        assert_eq!(parsed.address2.as_deref(), Some("SPRINGFIELD"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(AddressError::EmptyInput));
        assert_eq!(parse("0"), Err(AddressError::EmptyInput));
        assert_eq!(parse("   "), Err(AddressError::EmptyInput));
        assert_eq!(parse_with_county(""), Err(AddressError::EmptyInput));
        assert_eq!(parse_with_county("0"), Err(AddressError::EmptyInput));
    }

    #[test]
    fn invalid_state() {
        assert_eq!(
            parse("123 Main St Springfield ZZ 62704"),
            Err(AddressError::InvalidState {
                state: "ZZ".to_string()
            })
        );
    }

    #[test]
    fn malformed_tail() {
        assert_eq!(
            parse("123 Main St Springfield IL"),
            Err(AddressError::MalformedTail)
        );
    }

    #[test]
    fn empty_prefix() {
        assert_eq!(parse("IL 62704"), Err(AddressError::EmptyPrefix));
    }

    #[test]
    fn two_token_street_without_city_is_rejected() {
        assert_eq!(parse("Main St IL 62704"), Err(AddressError::EmptyCity));
    }

    #[test]
    fn comma_path_rejects_bad_street() {
        assert_eq!(
            parse("Main Street, Springfield, IL 62704"),
            Err(AddressError::InvalidStreetAddress {
                street: "Main Street".to_string()
            })
        );
    }

    #[test]
    fn comma_path_accepts_numbered_street_without_suffix() {
        let parsed = parse("42 Wallaby, Sydney, OH 45365").unwrap();
        assert_eq!(parsed.address1, "42 Wallaby");
        assert_eq!(parsed.city, "Sydney");
    }

    #[test]
    fn parses_county() {
        assert_eq!(
            parse_with_county("123 Main St, Springfield, Greene, MO 65804"),
            Ok(ParsedAddress {
                address1: "123 Main St".to_string(),
                address2: None,
                city: "Springfield".to_string(),
                state: UsState::Missouri,
                zip: "65804".to_string(),
                county: Some("Greene".to_string()),
            })
        );
    }

    #[test]
    fn county_path_without_county() {
        let parsed = parse_with_county("123 Main St, Springfield, MO 65804").unwrap();
        assert_eq!(parsed.city, "Springfield");
        assert_eq!(parsed.county, None);
    }

    #[test]
    fn county_path_with_unit_segment() {
        let parsed =
            parse_with_county("123 Main St Apt 2, rear, Springfield, Greene, MO 65804").unwrap();
        assert_eq!(parsed.address1, "123 Main St");
        assert_eq!(parsed.address2.as_deref(), Some("APT 2 REAR"));
        assert_eq!(parsed.city, "Springfield");
        assert_eq!(parsed.county.as_deref(), Some("Greene"));
    }

    #[test]
    fn county_path_needs_three_parts() {
        assert_eq!(
            parse_with_county("123 Main St Springfield, MO 65804"),
            Err(AddressError::InsufficientParts { found: 2 })
        );
    }

    #[test]
    fn county_path_needs_clean_state_zip() {
        assert_eq!(
            parse_with_county("123 Main St, Springfield, Greene MO 65804 USA"),
            Err(AddressError::MalformedStateZip {
                segment: "Greene MO 65804 USA".to_string()
            })
        );
    }

    #[test]
    fn county_path_empty_city() {
        assert_eq!(
            parse_with_county("123 Main St, , MO 65804"),
            Err(AddressError::EmptyCity)
        );
    }
}
