/// Error types for loading the scorecard dataset
use thiserror::Error;

/// Errors raised while reading the scorecard spreadsheet.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is not present in the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The input has no header row at all
    #[error("Input has no header row")]
    NoHeader,
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
