//! Detection of secondary unit designations ("Apt 4B", "Ste 200", "# 12").

use crate::vocabulary::Vocabulary;

/// A street line with any trailing unit designation separated out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSplit<'a> {
    /// The street line without the unit.
    pub street: &'a str,
    /// The unit designation, if one was found.
    pub unit: Option<&'a str>,
}

/// Separates a trailing unit designation from a street line.
///
/// Finds the leftmost whole-word unit indicator that is followed by
/// whitespace and more text, and splits there. The split is skipped when
/// the street part would be empty or `"0"`, so a line that is *only* a unit
/// designation stays as the street.
#[must_use]
pub fn extract_unit<'a>(vocabulary: &Vocabulary, line: &'a str) -> UnitSplit<'a> {
    let unchanged = UnitSplit {
        street: line,
        unit: None,
    };

    let Some(found) = vocabulary.unit_pattern().find(line) else {
        return unchanged;
    };

    let street = line[..found.start()].trim();
    if street.is_empty() || street == "0" {
        log::trace!("extract_unit: not splitting {line:?}, street part would be empty");
        return unchanged;
    }

    let unit = found.as_str().trim();
    log::trace!("extract_unit: {line:?} -> street={street:?} unit={unit:?}");

    UnitSplit {
        street,
        unit: Some(unit),
    }
}

/// Normalizes the casing of a secondary line.
///
/// Blank input yields `None`. Values starting with `#` are returned trimmed
/// but otherwise untouched; everything else is upper-cased.
#[must_use]
pub fn normalize_unit(unit: Option<&str>) -> Option<String> {
    let unit = unit?.trim();

    if unit.is_empty() {
        None
    } else if unit.starts_with('#') {
        Some(unit.to_string())
    } else {
        Some(unit.to_uppercase())
    }
}
