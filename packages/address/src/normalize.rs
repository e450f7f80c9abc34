//! Whitespace and punctuation cleanup applied before any splitting.

use crate::vocabulary::Vocabulary;

/// Normalizes a raw address line.
///
/// * trims and collapses every whitespace run to a single space
/// * strips the trailing period(s) from any token that is a street suffix,
///   unit indicator, or state code (`"St."` → `"St"`, `"Apt.,"` → `"Apt,"`)
/// * strips trailing periods and commas from the end of the line
///
/// Idempotent: normalizing an already-normalized line returns it unchanged.
#[must_use]
pub fn normalize(vocabulary: &Vocabulary, raw: &str) -> String {
    let joined = raw
        .split_whitespace()
        .map(|token| strip_abbreviation_period(vocabulary, token))
        .collect::<Vec<_>>()
        .join(" ");

    joined
        .trim_end_matches(|c: char| c == '.' || c == ',' || c.is_whitespace())
        .to_string()
}

/// `"St."` → `"St"`, `"St.,"` → `"St,"`. Tokens whose base is not a known
/// abbreviation are returned untouched.
fn strip_abbreviation_period(vocabulary: &Vocabulary, token: &str) -> String {
    let body = token.trim_end_matches(',');
    let commas = &token[body.len()..];
    let base = body.trim_end_matches('.');

    if base.len() < body.len() && !base.is_empty() && vocabulary.is_abbreviation(base) {
        format!("{base}{commas}")
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> String {
        normalize(Vocabulary::builtin(), raw)
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            norm("  123   Main\tSt \n Springfield  IL 62704 "),
            "123 Main St Springfield IL 62704"
        );
    }

    #[test]
    fn strips_abbreviation_periods() {
        assert_eq!(
            norm("123 Main St. Apt. 4 Springfield Il. 62704"),
            "123 Main St Apt 4 Springfield Il 62704"
        );
    }

    #[test]
    fn strips_period_before_comma() {
        assert_eq!(
            norm("123 Main St., Springfield, IL 62704"),
            "123 Main St, Springfield, IL 62704"
        );
    }

    #[test]
    fn keeps_periods_on_other_tokens() {
        assert_eq!(norm("1 N.W. Loop Rd"), "1 N.W. Loop Rd");
        assert_eq!(norm("10 Dr.Who Ln"), "10 Dr.Who Ln");
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(norm("Springfield, IL 62704.,"), "Springfield, IL 62704");
        assert_eq!(norm("Springfield, IL 62704 ."), "Springfield, IL 62704");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("  \t "), "");
        assert_eq!(norm(".,"), "");
    }

    #[test]
    fn idempotent_on_mixed_punctuation() {
        for raw in [
            "123 Main St.. Springfield IL 62704",
            "CT.R. Foo, IL 62704.",
            "500 Elm Ave. ,  Apt.  4B , Metropolis , NY 10001 ,",
        ] {
            let once = norm(raw);
            assert_eq!(norm(&once), once, "not idempotent for {raw:?}");
        }
    }
}
