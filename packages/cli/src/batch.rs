//! Line-by-line parsing with JSON Lines output.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use us_address::{AddressError, AddressParser, ParsedAddress};

use crate::progress::ProgressCallback;

/// Machine-readable description of a failed parse.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Error kind, e.g. `"InvalidState"`.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl From<&AddressError> for ErrorReport {
    fn from(err: &AddressError) -> Self {
        Self {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

/// One output line of a batch run.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchLine<'a> {
    /// The line parsed.
    Parsed {
        /// The raw input line.
        input: &'a str,
        /// The parse result.
        address: ParsedAddress,
    },
    /// The line was rejected.
    Failed {
        /// The raw input line.
        input: &'a str,
        /// Error kind, e.g. `"InvalidState"`.
        error: &'static str,
        /// Human-readable message.
        message: String,
    },
}

impl<'a> BatchLine<'a> {
    /// Wraps a parse outcome for `input`.
    #[must_use]
    pub fn new(input: &'a str, result: Result<ParsedAddress, AddressError>) -> Self {
        match result {
            Ok(address) => Self::Parsed { input, address },
            Err(err) => Self::Failed {
                input,
                error: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Counts from a finished batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that parsed.
    pub parsed: u64,
    /// Lines that were rejected.
    pub failed: u64,
}

/// Parses every non-blank line of `reader`, writing one JSON object per
/// line to `writer`.
///
/// # Errors
///
/// * If reading a line or writing output fails
/// * If a result cannot be serialized
pub fn run<R: BufRead, W: Write>(
    parser: AddressParser<'_>,
    reader: R,
    writer: &mut W,
    with_county: bool,
    progress: &dyn ProgressCallback,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for line in reader.lines() {
        let line = line?;
        progress.inc(1);

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = if with_county {
            parser.parse_with_county(input)
        } else {
            parser.parse(input)
        };

        if result.is_ok() {
            summary.parsed += 1;
        } else {
            summary.failed += 1;
        }

        serde_json::to_writer(&mut *writer, &BatchLine::new(input, result))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    progress.finish(format!(
        "{} parsed, {} failed",
        summary.parsed, summary.failed
    ));

    Ok(summary)
}
