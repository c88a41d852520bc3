//! Error types for grasp-dataset crate.

use thiserror::Error;

/// Errors that can occur in grasp-dataset operations.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// A requested column is not in the header.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as a number.
    #[error("row {row}, column '{column}': cannot parse '{value}'")]
    Parse {
        /// Data row (1-based, header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// A label cell is not 0 or 1.
    #[error("row {row}: invalid label '{value}' (expected 0 or 1)")]
    InvalidLabel {
        /// Data row (1-based, header excluded).
        row: usize,
        /// Raw cell text.
        value: String,
    },

    /// Invalid split ratio.
    #[error("invalid split ratio: {0} (must be in (0, 1))")]
    InvalidSplitRatio(f64),

    /// Empty dataset.
    #[error("dataset is empty")]
    EmptyDataset,
}

impl DatasetError {
    /// Creates an IO error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid label error.
    #[must_use]
    pub fn invalid_label(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidLabel {
            row,
            value: value.into(),
        }
    }

    /// Creates an invalid split ratio error.
    #[must_use]
    pub const fn invalid_split_ratio(ratio: f64) -> Self {
        Self::InvalidSplitRatio(ratio)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type for grasp-dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
