//! Cell-level normalizers.
//!
//! Every function here is total: malformed input degrades to `None`, an empty
//! key, or `Outro`, never to an error.

pub mod distance;
pub mod numeric;
pub mod text;
pub mod vehicle;

pub use distance::extract_distance_from_text;
pub use numeric::{parse_locale_number, parse_locale_text};
pub use text::normalize_text;
pub use vehicle::{VEHICLE_RULES, VehicleRule, classify_vehicle_type};
