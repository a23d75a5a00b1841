//! Data structures for representing tabular input.
//!
//! This module defines the core data structures used throughout `csvview`
//! for the values that end up as delimited text: single cells ([`Field`]),
//! lines of cells ([`Row`]), the ordered collection handed to the encoder
//! ([`RowSet`]) and the name → value bag scanned when no explicit rows are
//! supplied ([`DataBag`]).
//!
//! JSON documents convert directly into these types, which is how the
//! command-line front end feeds the encoder.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// One cell of tabular data.
///
/// # Variants
/// * `Empty` - A missing value, rendered as an empty cell
/// * `Text` - Arbitrary text, including control characters
/// * `Integer` / `Unsigned` - Numbers rendered in plain decimal
/// * `Float` - Shortest round-trip decimal, or exponent form for very large
///   and very small magnitudes (see [`Field::render`])
/// * `Bool` - Rendered as `true` or `false`
/// * `Nested` - A structured value with no scalar rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Empty,
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Nested(Value),
}

impl Field {
    /// Returns the text form of the field, or `None` for nested values.
    ///
    /// Floats with a magnitude of at least `1e16` or below `1e-5` are written
    /// in exponent form (`1e300`, `2.5e-7`); other floats use the shortest
    /// plain decimal that reads back to the same value (`0.1`, `2`).
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            Field::Empty => Some(Cow::Borrowed("")),
            Field::Text(s) => Some(Cow::Borrowed(s)),
            Field::Integer(n) => Some(Cow::Owned(n.to_string())),
            Field::Unsigned(n) => Some(Cow::Owned(n.to_string())),
            Field::Float(n) => Some(Cow::Owned(render_float(*n))),
            Field::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Field::Nested(_) => None,
        }
    }
}

const FLOAT_EXP_UPPER: f64 = 1e16;
const FLOAT_EXP_LOWER: f64 = 1e-5;

fn render_float(n: f64) -> String {
    let magnitude = n.abs();
    if n.is_finite() && n != 0.0 && !(FLOAT_EXP_LOWER..FLOAT_EXP_UPPER).contains(&magnitude) {
        format!("{:e}", n)
    } else {
        n.to_string()
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Empty,
            Value::Bool(b) => Field::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Field::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Field::Unsigned(u)
                } else {
                    // Without arbitrary_precision every other number is an f64
                    Field::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Field::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => Field::Nested(nested),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Integer(n)
    }
}

impl From<i32> for Field {
    fn from(n: i32) -> Self {
        Field::Integer(n.into())
    }
}

impl From<u64> for Field {
    fn from(n: u64) -> Self {
        Field::Unsigned(n)
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Field::Float(n)
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Bool(b)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Field::Empty)
    }
}

/// One line of output before normalization.
///
/// # Variants
/// * `Fields` - An ordered sequence of cells
/// * `Scalar` - A bare value that becomes a one-cell line
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Fields(Vec<Field>),
    Scalar(Field),
}

impl Row {
    /// Wraps a bare scalar into a one-field row. Rows that already hold
    /// fields are returned unchanged, so normalizing twice is the same as
    /// normalizing once.
    pub fn normalize(self) -> Row {
        match self {
            Row::Scalar(field) => Row::Fields(vec![field]),
            fields @ Row::Fields(_) => fields,
        }
    }

    /// The cells of this row in order. A scalar row yields itself as the
    /// only cell.
    pub fn fields(&self) -> &[Field] {
        match self {
            Row::Fields(fields) => fields,
            Row::Scalar(field) => std::slice::from_ref(field),
        }
    }
}

impl From<Value> for Row {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Row::Fields(items.into_iter().map(Field::from).collect()),
            other => Row::Scalar(Field::from(other)),
        }
    }
}

impl<F: Into<Field>> From<Vec<F>> for Row {
    fn from(fields: Vec<F>) -> Self {
        Row::Fields(fields.into_iter().map(Into::into).collect())
    }
}

/// An ordered sequence of rows, the unit the encoder consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: impl Into<Row>) {
        self.rows.push(row.into());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Normalizes every row, keeping their order. See [`Row::normalize`].
    pub fn normalize(self) -> RowSet {
        self.rows.into_iter().map(Row::normalize).collect()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl From<Vec<Value>> for RowSet {
    fn from(items: Vec<Value>) -> Self {
        items.into_iter().map(Row::from).collect()
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A name → value mapping scanned for row collections.
///
/// Entries iterate in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBag {
    entries: Map<String, Value>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the previous value under `name`.
    /// Replacing an existing entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        // shift_remove keeps the remaining entries in insertion order
        self.entries.shift_remove(name)
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> serde_json::map::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Map<String, Value>> for DataBag {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DataBag {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
