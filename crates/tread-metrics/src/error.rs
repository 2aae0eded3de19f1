use thiserror::Error;
use tread_transform::TransformError;

/// Errors raised while computing metrics or writing report views.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Failed to write a report view.
    #[error("failed to write CSV: {message}")]
    CsvWrite { message: String },
}

impl From<polars::prelude::PolarsError> for MetricsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<TransformError> for MetricsError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::DataFrame { message } => Self::DataFrame { message },
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
