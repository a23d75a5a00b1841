//! Delimited text encoder.
//!
//! Turns a [`RowSet`] into CSV/TSV-style text under a [`FormatConfig`].
//! Quoting is loose: nothing is rejected for its content, a field is only
//! wrapped in the quote character when leaving it bare would make the
//! output ambiguous.
//!
//! # Quoting rules
//!
//! A field is quoted when it contains the separator, the quote character,
//! the escape character, `\n` or `\r`, a control character other than tab,
//! or when it starts or ends with whitespace. Inside a quoted field each
//! quote character (and each escape character, when the two differ) is
//! prefixed with the escape character. Empty fields are never quoted.

use crate::config::FormatConfig;
use crate::data::{Field, RowSet};
use crate::error::EncodeError;
use tracing::trace;

/// Encodes every row of `rows`, appending the end-of-line sequence after
/// each one (the last included).
///
/// # Arguments
/// * `config` - Quote, escape and separator characters plus the line terminator
/// * `rows` - Rows to encode; bare scalars are treated as one-field rows
///
/// # Returns
/// * `Ok(String)` - The encoded text, empty for an empty row set
/// * `Err(EncodeError::UnencodableField)` - A field had no text form; nothing
///   is returned for the rows that did encode
///
/// # Examples
///
/// ```rust
/// use csvview::{encode, FormatConfig, Row, RowSet};
///
/// let rows = RowSet::from(vec![Row::from(vec!["a", "b"]), Row::from(vec!["c", "d"])]);
/// assert_eq!(encode(&FormatConfig::default(), &rows).unwrap(), "a,b\nc,d\n");
/// ```
pub fn encode(config: &FormatConfig, rows: &RowSet) -> Result<String, EncodeError> {
    let mut out = String::new();

    for (row_index, row) in rows.iter().enumerate() {
        write_row(config, row.fields(), row_index, &mut out)?;
        out.push_str(config.eol());
    }

    trace!(rows = rows.len(), bytes = out.len(), "encoded rows");
    Ok(out)
}

/// Encodes a single line of fields without the end-of-line sequence.
///
/// Errors report `row_index` 0.
pub fn encode_row(config: &FormatConfig, fields: &[Field]) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_row(config, fields, 0, &mut out)?;
    Ok(out)
}

/// Applies the quoting rules to one field's text.
pub fn encode_field(config: &FormatConfig, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_field(config, text, &mut out);
    out
}

fn write_row(
    config: &FormatConfig,
    fields: &[Field],
    row_index: usize,
    out: &mut String,
) -> Result<(), EncodeError> {
    for (field_index, field) in fields.iter().enumerate() {
        if field_index > 0 {
            out.push(config.sep_char());
        }
        let text = field.render().ok_or(EncodeError::UnencodableField {
            row_index,
            field_index,
        })?;
        write_field(config, &text, out);
    }
    Ok(())
}

fn write_field(config: &FormatConfig, text: &str, out: &mut String) {
    if !needs_quoting(config, text) {
        out.push_str(text);
        return;
    }

    let quote = config.quote_char();
    let escape = config.escape_char();

    out.push(quote);
    for c in text.chars() {
        if c == quote || (c == escape && escape != quote) {
            out.push(escape);
        }
        out.push(c);
    }
    out.push(quote);
}

fn needs_quoting(config: &FormatConfig, text: &str) -> bool {
    let (Some(first), Some(last)) = (text.chars().next(), text.chars().next_back()) else {
        return false;
    };
    if first.is_whitespace() || last.is_whitespace() {
        return true;
    }

    text.chars().any(|c| {
        c == config.sep_char()
            || c == config.quote_char()
            || c == config.escape_char()
            || c == '\n'
            || c == '\r'
            || (c.is_control() && c != '\t')
    })
}
