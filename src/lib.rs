//! Library crate for csvview
//!
//! Renders in-memory tabular data as delimiter-separated text (CSV, TSV or
//! any single-character separator) with configurable quoting.
//!
//! # Features
//!
//! - **Delimited Encoding**: Loose quoting that never rejects content, with
//!   configurable quote, escape and separator characters and line terminator
//! - **Row Resolution**: Rows come from an explicit collection, or are
//!   gathered from every array found in a name → value bag
//! - **Row Normalization**: Bare scalars become one-field rows
//! - **JSON Input**: Documents convert straight into rows and bags
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Field`, `Row`, `RowSet`, `DataBag`)
//! - [`config`]: Formatting configuration (`FormatConfig`)
//! - [`resolve`]: Row source resolution (`RowSource`, `resolve`)
//! - [`output`]: The delimited encoder and output writer
//! - [`view`]: `CsvView`, configuration plus rendering in one value
//! - [`input`]: JSON input loading
//! - [`cli`]: Command-line interface definitions
//! - [`utils`]: Flag value parsers
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```rust
//! use csvview::{CsvView, DataBag};
//! use serde_json::json;
//!
//! let mut bag = DataBag::new();
//! bag.insert("months", json!(["Jan", "Feb"]));
//! bag.insert("title", json!("ignored"));
//!
//! assert_eq!(CsvView::default().render_bag(bag).unwrap(), "Jan\nFeb\n");
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod output;
pub mod resolve;
pub mod utils;
pub mod view;

pub use cli::Args;
pub use config::{FormatConfig, FormatOverrides};
pub use data::{DataBag, Field, Row, RowSet};
pub use error::{CsvViewError, EncodeError};
pub use output::{encode, encode_field, encode_row};
pub use resolve::{DEFAULT_DATA_KEY, RowSource, resolve, resolve_with_key};
pub use view::CsvView;
