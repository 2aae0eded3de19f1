//! Distance readings embedded in free-text observations.

use std::sync::LazyLock;

use regex::Regex;

static KM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d[\d.]*)\s*km").expect("km pattern is valid"));

/// Extract the first `<digits> km` reading from an observation.
///
/// Dots inside the digit run are thousands separators: `"Troca em 45.000 km"`
/// yields `45000.0`. Returns None when there is no match.
pub fn extract_distance_from_text(text: Option<&str>) -> Option<f64> {
    let captures = KM_PATTERN.captures(text?)?;
    let digits = captures.get(1)?.as_str().replace('.', "");
    digits.parse::<f64>().ok()
}
