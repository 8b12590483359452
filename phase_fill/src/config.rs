use crate::error::{FillError, Result};
use definitions::{FieldLayout, Record};
use serde::{Deserialize, Serialize};

/// Number of separators in a SAMPLE field that already carries PS (8 values).
pub const ANNOTATED_SEPARATORS: usize = 7;
pub const PS_SUFFIX: &str = ":PS";
pub const TOKEN_SEPARATOR: char = ':';

/// Which field decides whether a row needs a value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusSource {
    /// The data field. The same status is used for donor eligibility.
    Data,
    /// The schema field. Donor eligibility is still read from the data field,
    /// so malformed rows may be both filled and used as donors.
    Schema,
}

impl std::default::Default for StatusSource {
    fn default() -> Self {
        StatusSource::Data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhaseSetFillConfig {
    pub layout: FieldLayout,
    /// Separator between tokens in the schema and data fields.
    pub separator: char,
    /// A field with exactly this many separators is complete.
    pub annotated_separators: usize,
    /// Token appended to the schema field of incomplete rows.
    pub suffix: String,
    pub status_source: StatusSource,
}

impl std::default::Default for PhaseSetFillConfig {
    fn default() -> Self {
        Self {
            layout: FieldLayout::default(),
            separator: TOKEN_SEPARATOR,
            annotated_separators: ANNOTATED_SEPARATORS,
            suffix: PS_SUFFIX.to_string(),
            status_source: StatusSource::Data,
        }
    }
}

impl PhaseSetFillConfig {
    pub fn new(layout: FieldLayout, suffix: &str, status_source: StatusSource) -> Self {
        Self {
            layout,
            suffix: suffix.to_string(),
            status_source,
            ..Default::default()
        }
    }
    pub fn with_layout(mut self, layout: FieldLayout) -> Self {
        self.layout = layout;
        self
    }
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }
    pub fn with_status_source(mut self, status_source: StatusSource) -> Self {
        self.status_source = status_source;
        self
    }
    /// Check the configuration itself and then every record against the layout.
    /// Nothing is mutated, so a failure here leaves the table untouched.
    pub fn validate(&self, records: &[Record]) -> Result<()> {
        let FieldLayout {
            coordinate,
            schema,
            data,
        } = self.layout;
        if schema == data {
            let msg = format!("schema and data share the field index {}", schema);
            return Err(FillError::invalid_config(msg));
        }
        if coordinate == schema || coordinate == data {
            let msg = format!("coordinate field index {} collides with schema/data", coordinate);
            return Err(FillError::invalid_config(msg));
        }
        if self.suffix.is_empty() {
            return Err(FillError::invalid_config("empty schema suffix"));
        }
        let min_width = self.layout.min_width();
        let fields = [("coordinate", coordinate), ("schema", schema), ("data", data)];
        for (row, record) in records.iter().enumerate() {
            let width = record.width();
            if min_width <= width {
                continue;
            }
            if let Some(&(field, index)) = fields.iter().find(|&&(_, idx)| width <= idx) {
                return Err(FillError::FieldOutOfRange {
                    field,
                    index,
                    row,
                    width,
                });
            }
        }
        Ok(())
    }
}
