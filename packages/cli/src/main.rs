#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the US address parser.
//!
//! Parses single addresses or whole files (one address per line) into JSON,
//! formats JSON fields back into a line, and exposes the state/ZIP
//! validators. Uses `indicatif-log-bridge` (via [`progress::init_logger`])
//! so that log lines and the batch progress bar never fight for the
//! terminal.

mod batch;
mod progress;

use std::fs::File;
use std::io::{self, BufRead as _, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use us_address::{
    AddressFields, AddressParser, UsState, Vocabulary, format_address, is_valid_state,
    is_valid_zip_code,
};

use crate::batch::ErrorReport;
use crate::progress::{IndicatifProgress, NullProgress, ProgressCallback as _};

#[derive(Parser)]
#[command(name = "us_address", about = "US postal address parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single address line and print it as JSON
    Parse {
        /// The address, e.g. "123 Main St Springfield IL 62704"
        address: String,
        /// Expect a county between the city and the state
        #[arg(long)]
        county: bool,
        /// TOML file with `street_suffixes` and `unit_indicators` tables
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    /// Parse one address per line, writing JSON Lines to stdout
    Batch {
        /// Input file (reads stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Expect a county between the city and the state
        #[arg(long)]
        county: bool,
        /// TOML file with `street_suffixes` and `unit_indicators` tables
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    /// Format address fields given as JSON into a single line
    Format {
        /// JSON object with `address1`, `address2`, `city`, `state`, `zip`
        fields: String,
    },
    /// Check a ZIP code (`NNNNN` or `NNNNN-NNNN`)
    ValidateZip {
        /// The ZIP code to check
        zip: String,
    },
    /// Check a two-letter state code
    ValidateState {
        /// The state code to check
        state: String,
    },
    /// List the valid state codes
    States,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let multi = progress::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            address,
            county,
            vocabulary,
        } => {
            let vocabulary = load_vocabulary(vocabulary.as_deref())?;
            let parser = AddressParser::new(&vocabulary);

            let result = if county {
                parser.parse_with_county(&address)
            } else {
                parser.parse(&address)
            };

            match result {
                Ok(parsed) => {
                    println!("{}", serde_json::to_string_pretty(&parsed)?);
                }
                Err(err) => {
                    let report = ErrorReport::from(&err);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Batch {
            input,
            county,
            vocabulary,
        } => {
            let vocabulary = load_vocabulary(vocabulary.as_deref())?;
            let parser = AddressParser::new(&vocabulary);
            let mut stdout = BufWriter::new(io::stdout().lock());

            let summary = if let Some(path) = input {
                let total = count_lines(&path)?;
                let bar = IndicatifProgress::lines_bar(&multi, "Parsing addresses");
                bar.set_total(total);

                let reader = BufReader::new(File::open(&path)?);
                batch::run(parser, reader, &mut stdout, county, &bar)?
            } else {
                let stdin = io::stdin().lock();
                batch::run(parser, stdin, &mut stdout, county, &NullProgress)?
            };

            log::info!(
                "Batch complete: {} parsed, {} failed",
                summary.parsed,
                summary.failed
            );
        }
        Commands::Format { fields } => {
            let fields: AddressFields = serde_json::from_str(&fields)?;
            println!("{}", format_address(&fields));
        }
        Commands::ValidateZip { zip } => {
            let valid = is_valid_zip_code(&zip);
            println!("{valid}");
            return Ok(exit_code(valid));
        }
        Commands::ValidateState { state } => {
            let valid = is_valid_state(&state);
            println!("{valid}");
            return Ok(exit_code(valid));
        }
        Commands::States => {
            for state in UsState::all() {
                println!("{}  {}", state.code(), state.name());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads a custom vocabulary, or clones the builtin one.
fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, us_address::VocabularyError> {
    path.map_or_else(
        || Ok(Vocabulary::builtin().clone()),
        |path| {
            log::info!("Loading vocabulary from {}", path.display());
            Vocabulary::from_path(path)
        },
    )
}

fn count_lines(path: &Path) -> io::Result<u64> {
    let mut total = 0;
    for line in BufReader::new(File::open(path)?).lines() {
        line?;
        total += 1;
    }
    Ok(total)
}

const fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_parse_subcommand() {
        let cli = Cli::try_parse_from([
            "us_address",
            "parse",
            "123 Main St, Springfield, Greene, MO 65804",
            "--county",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Parse {
                county: true,
                vocabulary: None,
                ..
            }
        ));
    }

    #[test]
    fn parses_batch_subcommand() {
        let cli = Cli::try_parse_from(["us_address", "batch", "--input", "addresses.txt"]).unwrap();

        let Commands::Batch { input, county, .. } = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(input, Some(PathBuf::from("addresses.txt")));
        assert!(!county);
    }

    #[test]
    fn builtin_vocabulary_without_path() {
        let vocabulary = load_vocabulary(None).unwrap();
        assert!(vocabulary.is_street_suffix("ST"));
    }
}
