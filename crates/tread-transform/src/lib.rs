//! Fleet tire enrichment.
//!
//! Turns the three raw sheets into one enriched tires table:
//!
//! - [`normalization`]: locale numbers, km readings, join keys, vehicle types
//! - [`aliases`]: spelling variants of column headers
//! - [`position`]: left join of position labels and coordinates
//! - [`baseline`]: the ordered baseline tread cascade
//! - [`pipeline`]: the full transform

pub mod aliases;
pub mod baseline;
pub mod distance;
pub mod error;
pub mod frame;
pub mod normalization;
pub mod pipeline;
pub mod position;

pub use baseline::{
    BaselineEntry, BaselineResolution, BaselineTable, BaselineTier, TireKey, resolve_baseline,
};
pub use error::{Result, TransformError};
pub use normalization::{
    classify_vehicle_type, extract_distance_from_text, normalize_text, parse_locale_number,
    parse_locale_text,
};
pub use pipeline::{EnrichedFrame, transform};
