use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or validating pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds are not finite or not strictly increasing.
    #[error("invalid thresholds: critical_mm={critical_mm}, alert_mm={alert_mm} (alert_mm must be greater than critical_mm)")]
    InvalidThresholds { critical_mm: f64, alert_mm: f64 },

    /// A cost setting is not a finite number.
    #[error("invalid {field} value: {value}")]
    InvalidCost { field: &'static str, value: f64 },

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::PipelineConfig`].
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
