//! Destination handling for encoded text.
//!
//! Writes the rendered output either to a file or to stdout.

use crate::error::CsvViewError;
use humansize::{DECIMAL, format_size};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Writes `text` to `output`, or to stdout when no path is given.
///
/// # Arguments
/// * `text` - Fully encoded output
/// * `output` - Optional destination file, created or truncated
///
/// # Returns
/// * `Result<(), CsvViewError>` - Ok if everything was written and flushed
///
/// # Note
/// The text is already complete when this runs, so a failed encode never
/// leaves a half-written file behind.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), CsvViewError> {
    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(io::BufWriter::new(File::create(path)?))
    } else {
        Box::new(io::stdout().lock())
    };

    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    if let Some(path) = output {
        info!(
            path = %path.display(),
            size = %format_size(text.len() as u64, DECIMAL),
            "output written"
        );
    }

    Ok(())
}
