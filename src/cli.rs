//! CLI interface definitions for the `csvview` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs. `Args` knows how to turn
//! itself into the effective [`FormatConfig`] and log level.
//!
//! # Example
//!
//! ```bash
//! csvview report.json --sep-char ';' --eol crlf --output report.csv
//! ```
//!
//! # Configuration precedence
//!
//! defaults, then `--tsv`, then `--config FILE`, then the individual
//! character/eol flags.

use crate::config::{FormatConfig, FormatOverrides};
use crate::error::CsvViewError;
use crate::resolve::DEFAULT_DATA_KEY;
use crate::utils::{parse_char, parse_eol};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Command-line arguments for `csvview`.
///
/// # Examples
///
/// ```rust
/// use csvview::Args;
/// use clap::Parser;
///
/// let args = Args::parse_from(["csvview", "rows.json", "--tsv"]);
/// assert_eq!(args.format_config().unwrap().sep_char(), '\t');
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "csvview", version, about)]
pub struct Args {
    /// JSON input file: an array of rows, or an object to scan for row
    /// arrays (reads stdin when omitted or '-')
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON file with any of quote_char, escape_char, sep_char, eol
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from the tab-separated preset
    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    /// Field separator (single character; '\t' or 'tab' accepted)
    #[arg(long, value_name = "CHAR", value_parser = parse_char)]
    pub sep_char: Option<char>,

    /// Character wrapped around fields that need quoting
    #[arg(long, value_name = "CHAR", value_parser = parse_char)]
    pub quote_char: Option<char>,

    /// Character placed before quote characters inside quoted fields
    #[arg(long, value_name = "CHAR", value_parser = parse_char)]
    pub escape_char: Option<char>,

    /// Line terminator appended after every row ('crlf', 'lf', 'none' or escapes)
    #[arg(long, value_name = "EOL", value_parser = parse_eol, allow_hyphen_values = true)]
    pub eol: Option<String>,

    /// Key holding the explicit row collection in object input
    #[arg(long, value_name = "KEY", default_value = DEFAULT_DATA_KEY)]
    pub data_key: String,

    /// Print the effective format configuration as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the effective configuration from the preset, the optional
    /// configuration file and the individual flags, in that order.
    pub fn format_config(&self) -> Result<FormatConfig, CsvViewError> {
        let mut config = if self.tsv {
            FormatConfig::tsv()
        } else {
            FormatConfig::default()
        };

        if let Some(path) = &self.config {
            config = FormatOverrides::from_json_file(path)?.apply(config);
        }

        let flags = FormatOverrides {
            quote_char: self.quote_char,
            escape_char: self.escape_char,
            sep_char: self.sep_char,
            eol: self.eol.clone(),
        };
        Ok(flags.apply(config))
    }

    /// Log level selected by `-v`; `RUST_LOG` takes precedence when set.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
