//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook directory not found.
    #[error("workbook directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a sheet file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Sheet Errors ===
    /// Failed to parse a sheet with Polars.
    #[error("failed to parse sheet {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Two files resolve to the same sheet name.
    #[error("duplicate sheet '{name}' in {path}")]
    DuplicateSheet { name: String, path: PathBuf },

    /// One or more required sheets are absent.
    #[error("workbook must contain the sheets: {}; missing: {}", required.join(", "), missing.join(", "))]
    MissingSheets {
        missing: Vec<String>,
        required: Vec<String>,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
