//! Street-suffix and unit-indicator reference tables.
//!
//! The builtin tables live in `vocabulary/default.toml` and are embedded at
//! compile time. Callers with their own conventions can load a document of
//! the same shape via [`Vocabulary::from_toml_str`] or
//! [`Vocabulary::from_path`]. State codes are not part of the vocabulary;
//! they always come from [`UsState`].

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use us_address_models::UsState;

use crate::error::VocabularyError;

const BUILTIN_TOML: &str = include_str!("../vocabulary/default.toml");

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::from_toml_str(BUILTIN_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse builtin vocabulary: {e}"))
});

/// On-disk shape of a vocabulary document.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    street_suffixes: Vec<String>,
    unit_indicators: Vec<String>,
}

/// An immutable set of upper-case street suffixes and unit indicators,
/// together with the unit-designation pattern compiled from them.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    street_suffixes: BTreeSet<String>,
    unit_indicators: BTreeSet<String>,
    unit_pattern: Regex,
}

impl Vocabulary {
    /// Builds a vocabulary from raw table entries.
    ///
    /// Entries are trimmed and upper-cased; duplicates collapse.
    ///
    /// # Errors
    ///
    /// * [`VocabularyError::EmptyEntry`] if any entry is blank
    /// * [`VocabularyError::EmptyTable`] if either table has no entries
    /// * [`VocabularyError::Regex`] if the unit pattern fails to compile
    pub fn new<S, U>(street_suffixes: S, unit_indicators: U) -> Result<Self, VocabularyError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        let street_suffixes = collect_table("street_suffixes", street_suffixes)?;
        let unit_indicators = collect_table("unit_indicators", unit_indicators)?;
        let unit_pattern = compile_unit_pattern(&unit_indicators)?;

        log::debug!(
            "Loaded vocabulary: {} street suffixes, {} unit indicators",
            street_suffixes.len(),
            unit_indicators.len()
        );

        Ok(Self {
            street_suffixes,
            unit_indicators,
            unit_pattern,
        })
    }

    /// Parses a TOML vocabulary document with `street_suffixes` and
    /// `unit_indicators` string arrays.
    ///
    /// # Errors
    ///
    /// * [`VocabularyError::Toml`] if the document is malformed
    /// * any error from [`Vocabulary::new`]
    pub fn from_toml_str(toml_str: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = toml::de::from_str(toml_str)?;
        Self::new(file.street_suffixes, file.unit_indicators)
    }

    /// Reads and parses a TOML vocabulary document from disk.
    ///
    /// # Errors
    ///
    /// * [`VocabularyError::Io`] if the file cannot be read
    /// * any error from [`Vocabulary::from_toml_str`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Returns the process-wide builtin vocabulary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `vocabulary/default.toml` is malformed.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Whether `token` (any case) is a street suffix.
    #[must_use]
    pub fn is_street_suffix(&self, token: &str) -> bool {
        self.street_suffixes.contains(&token.to_uppercase())
    }

    /// Whether `token` (any case) is exactly a unit indicator.
    #[must_use]
    pub fn is_unit_indicator(&self, token: &str) -> bool {
        self.unit_indicators.contains(&token.to_uppercase())
    }

    /// Whether `token` (any case) begins with a unit indicator, so `"#12"`
    /// and `"APT"` both qualify.
    #[must_use]
    pub fn starts_with_unit_indicator(&self, token: &str) -> bool {
        let upper = token.to_uppercase();
        self.unit_indicators
            .iter()
            .any(|indicator| upper.starts_with(indicator.as_str()))
    }

    /// Whether `token` (any case) is a street suffix, unit indicator, or
    /// state code. These are the abbreviations the normalizer strips
    /// trailing periods from.
    #[must_use]
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let upper = token.to_uppercase();
        self.street_suffixes.contains(&upper)
            || self.unit_indicators.contains(&upper)
            || UsState::from_code(&upper).is_some()
    }

    /// Pattern matching a whole-word unit indicator followed by whitespace
    /// and at least one more character, through the end of the line.
    #[must_use]
    pub const fn unit_pattern(&self) -> &Regex {
        &self.unit_pattern
    }

    /// Street suffixes, upper-case, in sorted order.
    pub fn street_suffixes(&self) -> impl Iterator<Item = &str> {
        self.street_suffixes.iter().map(String::as_str)
    }

    /// Unit indicators, upper-case, in sorted order.
    pub fn unit_indicators(&self) -> impl Iterator<Item = &str> {
        self.unit_indicators.iter().map(String::as_str)
    }
}

fn collect_table<I>(table: &'static str, entries: I) -> Result<BTreeSet<String>, VocabularyError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = BTreeSet::new();

    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            return Err(VocabularyError::EmptyEntry { table });
        }
        set.insert(entry.to_uppercase());
    }

    if set.is_empty() {
        return Err(VocabularyError::EmptyTable { table });
    }

    Ok(set)
}

/// Compiles `(?:^|\s)(?:IND1|IND2|...)\s+.+$`, case-insensitive.
///
/// The leading `^|\s` guard makes each indicator a whole whitespace-delimited
/// word, which also works for non-word indicators like `#` where `\b` would
/// not. Longer indicators are listed first so that, at a given position, the
/// longest one wins.
fn compile_unit_pattern(unit_indicators: &BTreeSet<String>) -> Result<Regex, VocabularyError> {
    let mut alternatives: Vec<&str> = unit_indicators.iter().map(String::as_str).collect();
    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = alternatives
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"(?i)(?:^|\s)(?:{alternation})\s+.+$");
    Ok(Regex::new(&pattern)?)
}
