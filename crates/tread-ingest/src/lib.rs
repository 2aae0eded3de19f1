//! Fleet workbook ingestion.
//!
//! This crate turns the uploaded spreadsheet into Polars DataFrames and checks
//! that the sheets the pipeline needs are present.
//!
//! # Features
//!
//! - **Workbook**: named sheets, read from a directory of CSV files
//! - **Loader**: required-sheet validation and header trimming
//! - **Cell helpers**: null-tolerant text extraction shared by later stages
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tread_ingest::{ReadOptions, Workbook, load_tables};
//!
//! let workbook = Workbook::from_dir(Path::new("fleet/2024-06"), &ReadOptions::default())?;
//! let tables = load_tables(&workbook)?;
//! ```

mod error;
mod loader;
mod polars_utils;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Workbook ===
pub use workbook::{ReadOptions, Workbook};

// === Loader ===
pub use loader::{SourceTables, load_tables, trim_column_names};

// === Cell Helpers ===
pub use polars_utils::{
    any_to_string, any_to_text, column_text, column_values, format_numeric, has_column,
};
