//! Formatting configuration for the delimited encoder.
//!
//! [`FormatConfig`] carries the four knobs that control output: the quote,
//! escape and separator characters plus the line terminator. Every field has
//! a default, so a configuration file only needs to name what it changes:
//!
//! ```json
//! { "sep_char": ";", "eol": "\r\n" }
//! ```

use crate::error::CsvViewError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_QUOTE_CHAR: char = '"';
pub const DEFAULT_ESCAPE_CHAR: char = '"';
pub const DEFAULT_SEP_CHAR: char = ',';
pub const DEFAULT_EOL: &str = "\n";

/// Formatting rules for one encode operation.
///
/// The three characters are single `char`s; `eol` may be any string,
/// including an empty one. Values are fixed once built; use the `with_*`
/// methods to derive a changed copy.
///
/// # Examples
///
/// ```rust
/// use csvview::FormatConfig;
///
/// let config = FormatConfig::default().with_sep_char(';').with_eol("\r\n");
/// assert_eq!(config.sep_char(), ';');
/// assert_eq!(config.quote_char(), '"');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatConfig {
    quote_char: char,
    escape_char: char,
    sep_char: char,
    eol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            quote_char: DEFAULT_QUOTE_CHAR,
            escape_char: DEFAULT_ESCAPE_CHAR,
            sep_char: DEFAULT_SEP_CHAR,
            eol: DEFAULT_EOL.to_string(),
        }
    }
}

impl FormatConfig {
    pub fn new(
        quote_char: char,
        escape_char: char,
        sep_char: char,
        eol: impl Into<String>,
    ) -> Self {
        Self {
            quote_char,
            escape_char,
            sep_char,
            eol: eol.into(),
        }
    }

    /// Comma-separated preset, identical to [`FormatConfig::default`].
    pub fn csv() -> Self {
        Self::default()
    }

    /// Tab-separated preset.
    pub fn tsv() -> Self {
        Self::default().with_sep_char('\t')
    }

    /// Reads a configuration from a JSON file. Missing keys take their
    /// defaults; unknown keys and multi-character values are rejected.
    pub fn from_json_file(path: &Path) -> Result<Self, CsvViewError> {
        Ok(FormatOverrides::from_json_file(path)?.apply(Self::default()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CsvViewError> {
        Ok(FormatOverrides::from_json_str(raw)?.apply(Self::default()))
    }

    /// Pretty-printed JSON in the same shape [`FormatConfig::from_json_str`]
    /// reads, so the output can be saved as a configuration file.
    pub fn to_json_pretty(&self) -> Result<String, CsvViewError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    pub fn escape_char(&self) -> char {
        self.escape_char
    }

    pub fn sep_char(&self) -> char {
        self.sep_char
    }

    pub fn eol(&self) -> &str {
        &self.eol
    }

    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    pub fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    pub fn with_sep_char(mut self, sep_char: char) -> Self {
        self.sep_char = sep_char;
        self
    }

    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }
}

/// A partial [`FormatConfig`]: only the fields that are set replace the
/// corresponding value of a base configuration.
///
/// Configuration files and command-line flags are both read into this
/// shape so they can be layered on top of a preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatOverrides {
    pub quote_char: Option<char>,
    pub escape_char: Option<char>,
    pub sep_char: Option<char>,
    pub eol: Option<String>,
}

impl FormatOverrides {
    pub fn from_json_file(path: &Path) -> Result<Self, CsvViewError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CsvViewError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns `base` with every set field replaced.
    pub fn apply(self, base: FormatConfig) -> FormatConfig {
        FormatConfig {
            quote_char: self.quote_char.unwrap_or(base.quote_char),
            escape_char: self.escape_char.unwrap_or(base.escape_char),
            sep_char: self.sep_char.unwrap_or(base.sep_char),
            eol: self.eol.unwrap_or(base.eol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FormatConfig::default();
        assert_eq!(config.quote_char(), '"');
        assert_eq!(config.escape_char(), '"');
        assert_eq!(config.sep_char(), ',');
        assert_eq!(config.eol(), "\n");
        assert_eq!(FormatConfig::csv(), config);
    }

    #[test]
    fn test_tsv_preset() {
        let config = FormatConfig::tsv();
        assert_eq!(config.sep_char(), '\t');
        assert_eq!(config.eol(), "\n");
    }

    #[test]
    fn test_builders_leave_other_fields_alone() {
        let config = FormatConfig::default()
            .with_quote_char('\'')
            .with_escape_char('\\')
            .with_eol("");
        assert_eq!(config.quote_char(), '\'');
        assert_eq!(config.escape_char(), '\\');
        assert_eq!(config.sep_char(), ',');
        assert_eq!(config.eol(), "");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FormatConfig::from_json_str(r#"{ "sep_char": ";", "eol": "\r\n" }"#).unwrap();
        assert_eq!(config.sep_char(), ';');
        assert_eq!(config.eol(), "\r\n");
        assert_eq!(config.quote_char(), '"');

        let empty = FormatConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, FormatConfig::default());
    }

    #[test]
    fn test_json_rejects_multi_char_separator() {
        let result = FormatConfig::from_json_str(r#"{ "sep_char": "::" }"#);
        assert!(matches!(result, Err(CsvViewError::Json(_))));
    }

    #[test]
    fn test_json_rejects_unknown_keys() {
        let result = FormatConfig::from_json_str(r#"{ "separator": ";" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "quote_char": "'" }}"#).unwrap();

        let config = FormatConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.quote_char(), '\'');
        assert_eq!(config.escape_char(), '"');
    }

    #[test]
    fn test_overrides_layer_on_preset() {
        let overrides = FormatOverrides::from_json_str(r#"{ "eol": "\r\n" }"#).unwrap();
        let config = overrides.apply(FormatConfig::tsv());
        assert_eq!(config.sep_char(), '\t');
        assert_eq!(config.eol(), "\r\n");

        let none = FormatOverrides::default().apply(FormatConfig::tsv());
        assert_eq!(none, FormatConfig::tsv());
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(FormatConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "quote_char": "\"", "escape_char": "\"", "sep_char": ",", "eol": "\n" })
        );
    }

    #[test]
    fn test_pretty_json_reads_back() {
        let config = FormatConfig::default()
            .with_sep_char(';')
            .with_escape_char('\\')
            .with_eol("\r\n");
        let printed = config.to_json_pretty().unwrap();
        assert!(printed.contains("\"sep_char\": \";\""), "{}", printed);
        assert_eq!(FormatConfig::from_json_str(&printed).unwrap(), config);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let result = FormatConfig::from_json_file(Path::new("/nonexistent/csvview.json"));
        assert!(matches!(result, Err(CsvViewError::Io(_))));
    }
}
