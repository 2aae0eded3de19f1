//! Shared types for the fleet tire pipeline.
//!
//! This crate holds the vocabulary every other crate speaks:
//!
//! - [`columns`]: the spreadsheet column names the pipeline reads and writes
//! - [`Condition`]: the ordered risk classification of a tire
//! - [`VehicleType`]: the free-text vehicle classification
//! - [`PipelineConfig`]: thresholds, costs and colors passed explicitly into
//!   each invocation

pub mod columns;
pub mod condition;
pub mod config;
pub mod error;
pub mod vehicle;

pub use condition::Condition;
pub use config::{
    ConditionColors, CostSettings, PipelineConfig, REQUIRED_SHEETS, SHEET_BASELINE,
    SHEET_POSITION, SHEET_TIRES, Thresholds,
};
pub use error::{ConfigError, Result};
pub use vehicle::VehicleType;
