//! Error types for extract ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an extract.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Invalid value in a required field.
    #[error("invalid {field} value '{value}' in {path} at line {line}")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
        line: u64,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, err: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
