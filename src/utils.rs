//! Utility functions for the `csvview` command line.
//!
//! This module provides:
//! - Backslash escape expansion for flag values (`\t`, `\n`, `\r`, `\\`, `\0`)
//! - Single-character parsing for the quote, escape and separator flags
//! - End-of-line parsing with `crlf`/`lf`/`cr` shorthands
//!
//! The parsers report failures as [`CsvViewError::InvalidArgument`], which
//! clap accepts directly from a `value_parser`.

use crate::error::CsvViewError;

/// Expands backslash escapes in `raw`. Unknown escapes are kept verbatim.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Parses a flag value that must name exactly one character.
///
/// Accepts the words `tab`, `space`, `comma`, `semicolon` and `pipe` as
/// well as backslash escapes.
pub fn parse_char(raw: &str) -> Result<char, CsvViewError> {
    let expanded = match raw.to_ascii_lowercase().as_str() {
        "tab" => return Ok('\t'),
        "space" => return Ok(' '),
        "comma" => return Ok(','),
        "semicolon" => return Ok(';'),
        "pipe" => return Ok('|'),
        _ => unescape(raw),
    };

    let mut chars = expanded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(CsvViewError::InvalidArgument(
            "expected a single character, got an empty value".to_string(),
        )),
        _ => Err(CsvViewError::InvalidArgument(format!(
            "expected a single character, got {:?}",
            expanded
        ))),
    }
}

/// Parses a line terminator. Accepts `crlf`, `lf`, `cr` and `none` as
/// shorthands; anything else is unescaped and used as-is.
pub fn parse_eol(raw: &str) -> Result<String, CsvViewError> {
    Ok(match raw.to_ascii_lowercase().as_str() {
        "crlf" => "\r\n".to_string(),
        "lf" => "\n".to_string(),
        "cr" => "\r".to_string(),
        "none" => String::new(),
        _ => unescape(raw),
    })
}
