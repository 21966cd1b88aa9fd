use crate::types::epw_field::EpwField;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpwError {
    #[error("Failed to read EPW file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to buffer EPW bytes in a temporary file")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to parse hourly rows of EPW file '{0}'")]
    Csv(PathBuf, #[source] PolarsError),

    #[error("EPW file '{0}' does not start with a LOCATION line")]
    MissingLocation(PathBuf),

    #[error("Malformed LOCATION {field}: '{value}'")]
    MalformedLocation { field: &'static str, value: String },

    #[error("EPW file '{path}' has {found} hourly rows, expected 8760 or 8784")]
    RowCount { path: PathBuf, found: usize },

    #[error("EPW column for '{field}' is missing or not numeric")]
    ColumnNotFound {
        field: EpwField,
        #[source]
        source: PolarsError,
    },

    #[error("EPW field '{field}' has no value at hour {hour}")]
    MissingValue { field: EpwField, hour: usize },
}
