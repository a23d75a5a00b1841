//! Error types for `csvview`.
//!
//! [`EncodeError`] is the only failure the encoder itself can produce.
//! [`CsvViewError`] covers the layers around it: reading configuration and
//! input documents, and writing the rendered text.

use thiserror::Error;

/// Failure raised by the delimited encoder.
///
/// Encoding is all-or-nothing: when this is returned no partial output is
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A field has no scalar text form (for example a nested array or
    /// object). Both indices are zero-based.
    #[error("field {field_index} of row {row_index} cannot be rendered as text")]
    UnencodableField { row_index: usize, field_index: usize },
}

/// The main error type for the `csvview` library.
///
/// # Error Categories
///
/// - **Encoding errors**: a row could not be rendered
/// - **I/O errors**: reading input/config files or writing output
/// - **JSON errors**: malformed input documents or configuration files
/// - **Argument errors**: values that cannot be turned into configuration
#[derive(Error, Debug)]
pub enum CsvViewError {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value could not be interpreted, such as a separator
    /// given as more than one character.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
