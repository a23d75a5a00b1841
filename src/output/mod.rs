//! Output side of `csvview`.
//!
//! # Modules
//!
//! - **delimited**: the encoder that turns rows into CSV/TSV text
//! - **writer**: sends finished text to a file or stdout
//!
//! The encoder is pure and has no I/O; the writer only ever sees complete
//! output.

pub mod delimited;
pub mod writer;

// Re-export the main entry points for convenience

/// Delimited encoder.
///
/// See [`delimited::encode`] for full documentation.
pub use delimited::{encode, encode_field, encode_row};

/// Output writer.
///
/// See [`writer::write_output`] for full documentation.
pub use writer::write_output;
