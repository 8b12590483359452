use thiserror::Error;

/// Errors raised while filling phase-set values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// The coordinate field of a row is not an integer.
    #[error("invalid coordinate {value:?} at row {row}")]
    InvalidCoordinate { row: usize, value: String },

    /// A configured field index does not exist in a row.
    #[error("{field} field index {index} is out of range at row {row} (width {width})")]
    FieldOutOfRange {
        field: &'static str,
        index: usize,
        row: usize,
        width: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FillError {
    pub fn invalid_coordinate(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            row,
            value: value.into(),
        }
    }
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FillError>;
