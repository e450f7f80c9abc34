//! Loose "does this look like a street line" check.

use crate::vocabulary::Vocabulary;

/// Whether `street` plausibly is a primary street line.
///
/// Rejects empty input, `"0"`, and anything without a digit. Accepts a line
/// containing a street-suffix token, or otherwise one whose first token
/// starts with a digit and that has at least two tokens (`"12 Something"`).
#[must_use]
pub fn is_valid_street_address(vocabulary: &Vocabulary, street: &str) -> bool {
    if street.is_empty() || street == "0" || !street.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let tokens: Vec<&str> = street.split_whitespace().collect();

    if tokens.iter().any(|t| vocabulary.is_street_suffix(t)) {
        return true;
    }

    tokens.len() >= 2
        && tokens
            .first()
            .is_some_and(|first| first.starts_with(|c: char| c.is_ascii_digit()))
}
