//! Row source resolution.
//!
//! Decides which rows get encoded. Callers either hand over an explicit
//! [`RowSet`] or a [`DataBag`]. For a bag, a collection stored under the
//! reserved key wins; failing that, every entry whose value is an array
//! contributes its elements, in the bag's insertion order.

use crate::data::{DataBag, Row, RowSet};
use serde_json::Value;
use tracing::debug;

/// Key that marks the explicit row collection inside a [`DataBag`].
pub const DEFAULT_DATA_KEY: &str = "data";

/// Where the rows for one encode come from.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSource {
    Explicit(RowSet),
    Scanned(DataBag),
}

impl RowSource {
    /// Builds a source from a bag. If `data_key` holds an array it becomes
    /// an explicit source and the rest of the bag is dropped.
    pub fn from_bag(mut bag: DataBag, data_key: &str) -> Self {
        if !matches!(bag.get(data_key), Some(Value::Array(_))) {
            return RowSource::Scanned(bag);
        }
        match bag.remove(data_key) {
            Some(Value::Array(items)) => RowSource::Explicit(RowSet::from(items)),
            _ => RowSource::Scanned(bag),
        }
    }

    /// Builds a source from a JSON document: an array is an explicit row
    /// collection, an object is a bag, anything else is a single row.
    pub fn from_json(value: Value, data_key: &str) -> Self {
        match value {
            Value::Array(items) => RowSource::Explicit(RowSet::from(items)),
            Value::Object(entries) => Self::from_bag(DataBag::from(entries), data_key),
            scalar => RowSource::Explicit(RowSet::from(vec![Row::from(scalar)])),
        }
    }

    /// Flattens the source into the row set to encode.
    pub fn into_rows(self) -> RowSet {
        match self {
            RowSource::Explicit(rows) => {
                debug!(rows = rows.len(), "using explicit row collection");
                rows
            }
            RowSource::Scanned(bag) => scan(bag),
        }
    }
}

impl From<RowSet> for RowSource {
    fn from(rows: RowSet) -> Self {
        RowSource::Explicit(rows)
    }
}

/// Resolves the rows of `bag` using [`DEFAULT_DATA_KEY`].
pub fn resolve(bag: DataBag) -> RowSet {
    resolve_with_key(bag, DEFAULT_DATA_KEY)
}

/// Resolves the rows of `bag`, treating `data_key` as the explicit row
/// collection.
pub fn resolve_with_key(bag: DataBag, data_key: &str) -> RowSet {
    RowSource::from_bag(bag, data_key).into_rows()
}

fn scan(bag: DataBag) -> RowSet {
    let entries = bag.len();
    let mut collections = 0usize;
    let rows: RowSet = bag
        .into_entries()
        .filter_map(|(_, value)| match value {
            Value::Array(items) => {
                collections += 1;
                Some(items)
            }
            _ => None,
        })
        .flatten()
        .map(Row::from)
        .collect();

    debug!(
        entries,
        collections,
        rows = rows.len(),
        "scanned data bag for row collections"
    );
    rows
}
