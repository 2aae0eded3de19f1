//! Column read/write helpers over Polars DataFrames.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tread_ingest::column_values;

use crate::error::Result;
use crate::normalization::parse_locale_number;

/// Parse a column with [`parse_locale_number`], or None if the column is absent.
pub fn numeric_column(df: &DataFrame, name: &str) -> Option<Vec<Option<f64>>> {
    column_values(df, name).map(|values| values.into_iter().map(parse_locale_number).collect())
}

/// Add or replace a Float64 column.
pub fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Add or replace a String column.
pub fn set_str_column(df: &mut DataFrame, name: &str, values: Vec<String>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Parse a column in place if present. Returns the parsed values.
pub fn parse_column_in_place(df: &mut DataFrame, name: &str) -> Result<Option<Vec<Option<f64>>>> {
    let Some(values) = numeric_column(df, name) else {
        return Ok(None);
    };
    set_f64_column(df, name, values.clone())?;
    Ok(Some(values))
}
