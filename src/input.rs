//! JSON input loading.
//!
//! Reads a JSON document from a file or stdin and turns it into a
//! [`RowSource`]. A top-level array is an explicit row collection, a
//! top-level object is a data bag, and any other value becomes one row.

use crate::error::CsvViewError;
use crate::resolve::RowSource;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Returns `true` when `path` means "read stdin".
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Parses a JSON document from `path`, or from stdin when `path` is
/// `None` or `-`.
pub fn read_json(path: Option<&Path>) -> Result<Value, CsvViewError> {
    let reader: Box<dyn Read> = match path {
        Some(p) if !is_stdin(path) => Box::new(BufReader::new(File::open(p)?)),
        _ => Box::new(io::stdin().lock()),
    };

    let value = serde_json::from_reader(reader)?;
    debug!(
        source = %path.map_or_else(|| "-".to_string(), |p| p.display().to_string()),
        "parsed JSON input"
    );
    Ok(value)
}

/// Reads `path` and classifies the document as a [`RowSource`], using
/// `data_key` as the explicit row collection inside objects.
pub fn read_source(path: Option<&Path>, data_key: &str) -> Result<RowSource, CsvViewError> {
    Ok(RowSource::from_json(read_json(path)?, data_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("rows.json"))));
    }

    #[test]
    fn test_read_source_array_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, r#"[["a", "b"], "c"]"#).unwrap();

        let source = read_source(Some(&path), "data").unwrap();
        match source {
            RowSource::Explicit(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected explicit rows, got {:?}", other),
        }
    }

    #[test]
    fn test_read_source_object_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bag.json");
        fs::write(&path, r#"{ "title": "x", "rows": [[1]] }"#).unwrap();

        let source = read_source(Some(&path), "data").unwrap();
        assert!(matches!(source, RowSource::Scanned(_)));
        assert_eq!(source.into_rows().len(), 1);
    }

    #[test]
    fn test_read_json_rejects_malformed_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_json(Some(&path)), Err(CsvViewError::Json(_))));
    }

    #[test]
    fn test_read_json_missing_file() {
        let result = read_json(Some(Path::new("/nonexistent/rows.json")));
        assert!(matches!(result, Err(CsvViewError::Io(_))));
    }
}
