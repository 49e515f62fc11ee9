//! Dataset error types
//!
//! Errors that can occur while loading the launch CSV. Individual bad rows
//! are not errors; they are skipped and reported in the `LoadReport`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a dataset load
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The CSV file could not be opened or read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed before any rows could be read (bad header etc.)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingColumn("class");
        assert_eq!(err.to_string(), "Missing required column: class");

        let err = DatasetError::Io {
            path: PathBuf::from("launches.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read \"launches.csv\": file not found"
        );
    }
}
