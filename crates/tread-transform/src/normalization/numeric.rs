//! Locale-tolerant numeric parsing.
//!
//! Fleet spreadsheets mix `1.234,5` (Brazilian) and `1234.5` spellings in the
//! same column. Unparseable cells degrade to `None` instead of failing the load.

use polars::prelude::AnyValue;

/// Parse a cell to f64.
///
/// Numeric cells are taken as-is and text goes through [`parse_locale_text`].
/// Nulls, blanks, unparseable text and non-finite values yield None.
pub fn parse_locale_number(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_locale_text(s),
        AnyValue::StringOwned(s) => parse_locale_text(s.as_str()),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Parse text that may use a comma as decimal separator.
///
/// - both `,` and `.` present: `.` groups thousands, `,` is the decimal point
/// - only `,` present: `,` is the decimal point
/// - otherwise the text is parsed directly
pub fn parse_locale_text(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = if trimmed.contains(',') && trimmed.contains('.') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.replace(',', ".")
    };
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_locale_text("3,5"), Some(3.5));
        assert_eq!(parse_locale_text("-0,25"), Some(-0.25));
    }

    #[test]
    fn test_dot_thousands_comma_decimal() {
        assert_eq!(parse_locale_text("1.234,5"), Some(1234.5));
        assert_eq!(parse_locale_text("12.345.678,90"), Some(12345678.9));
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_locale_text("1234.5"), Some(1234.5));
        assert_eq!(parse_locale_text("  16 "), Some(16.0));
    }

    #[test]
    fn test_invalid_is_none() {
        assert_eq!(parse_locale_text(""), None);
        assert_eq!(parse_locale_text("   "), None);
        assert_eq!(parse_locale_text("n/d"), None);
        assert_eq!(parse_locale_text("1,2,3"), None);
        assert_eq!(parse_locale_text("NaN"), None);
        assert_eq!(parse_locale_text("inf"), None);
    }

    #[test]
    fn test_any_value_dispatch() {
        assert_eq!(parse_locale_number(AnyValue::Null), None);
        assert_eq!(parse_locale_number(AnyValue::Int64(7)), Some(7.0));
        assert_eq!(parse_locale_number(AnyValue::Float64(2.5)), Some(2.5));
        assert_eq!(parse_locale_number(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(parse_locale_number(AnyValue::String("4,8")), Some(4.8));
        assert_eq!(parse_locale_number(AnyValue::Boolean(true)), Some(1.0));
    }
}
