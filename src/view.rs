//! A reusable CSV view.
//!
//! [`CsvView`] pairs a [`FormatConfig`] with the key that marks the
//! explicit row collection, so a caller can configure once and render many
//! data sources. Each render resolves, normalizes and encodes in one go.

use crate::config::FormatConfig;
use crate::data::{DataBag, RowSet};
use crate::error::EncodeError;
use crate::output::encode;
use crate::resolve::{DEFAULT_DATA_KEY, RowSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvView {
    config: FormatConfig,
    data_key: String,
}

impl Default for CsvView {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl CsvView {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            data_key: DEFAULT_DATA_KEY.to_string(),
        }
    }

    pub fn with_data_key(mut self, data_key: impl Into<String>) -> Self {
        self.data_key = data_key.into();
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn data_key(&self) -> &str {
        &self.data_key
    }

    /// Renders an explicit row set.
    pub fn render_rows(&self, rows: RowSet) -> Result<String, EncodeError> {
        encode(&self.config, &rows.normalize())
    }

    /// Renders a data bag, preferring the collection under the view's data
    /// key and otherwise concatenating every array in the bag.
    pub fn render_bag(&self, bag: DataBag) -> Result<String, EncodeError> {
        self.render(RowSource::from_bag(bag, &self.data_key))
    }

    pub fn render(&self, source: RowSource) -> Result<String, EncodeError> {
        self.render_rows(source.into_rows())
    }
}
