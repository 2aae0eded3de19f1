//! Cell-level helpers shared by the transform and metrics crates.

use polars::prelude::{AnyValue, DataFrame};

/// Converts an AnyValue to String. Nulls become an empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to trimmed text, returning None for nulls and blank cells.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a float without a trailing ".0" so `12.0` and `"12"` compare equal as keys.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

/// Returns true when the frame has a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Collects the raw cells of a column, or None if the column is absent.
pub fn column_values<'a>(df: &'a DataFrame, name: &str) -> Option<Vec<AnyValue<'a>>> {
    let column = df.column(name).ok()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(column.get(idx).unwrap_or(AnyValue::Null));
    }
    Some(values)
}

/// Collects a column as trimmed, non-blank text cells, or None if the column is absent.
pub fn column_text(df: &DataFrame, name: &str) -> Option<Vec<Option<String>>> {
    column_values(df, name).map(|values| values.into_iter().map(any_to_text).collect())
}
