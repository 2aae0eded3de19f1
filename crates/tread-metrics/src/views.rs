//! Report views over the metrics table.

use std::collections::HashMap;
use std::io::Write;

use polars::prelude::{CsvWriter, DataFrame, IntoLazy, SerWriter, col, lit};
use serde::Serialize;
use tread_ingest::{column_text, has_column};
use tread_model::columns::{
    CONDITION, DASHBOARD_COLUMNS, POSITION_CODE, POSITION_LABEL, POSITION_X, POSITION_Y,
};
use tread_model::{Condition, ConditionColors};
use tread_transform::frame::numeric_column;

use crate::error::{MetricsError, Result};

/// Dashboard column selection, keeping only columns present in the table.
pub fn full_view(metrics: &DataFrame) -> Result<DataFrame> {
    let present: Vec<&str> = DASHBOARD_COLUMNS
        .iter()
        .copied()
        .filter(|name| has_column(metrics, name))
        .collect();
    Ok(metrics.select(present)?)
}

/// All columns, only rows in a critical or alert condition.
pub fn at_risk_view(metrics: &DataFrame) -> Result<DataFrame> {
    if !has_column(metrics, CONDITION) {
        return Ok(metrics.clear());
    }
    let at_risk = col(CONDITION)
        .eq(lit(Condition::Critical.label()))
        .or(col(CONDITION).eq(lit(Condition::Alert.label())));
    let view = metrics.clone().lazy().filter(at_risk).collect()?;
    Ok(view)
}

/// Worst observed condition for one mounting position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRisk {
    pub code: String,
    pub label: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub condition: Option<Condition>,
    pub color: String,
}

// Undefined conditions rank after Ok.
fn severity(condition: Option<Condition>) -> usize {
    condition
        .and_then(|c| Condition::ALL.iter().position(|known| *known == c))
        .unwrap_or(Condition::ALL.len())
}

/// One entry per position code with the worst condition seen there.
///
/// Entries are ordered most severe first, then by first appearance. Rows
/// without a position code are skipped; on equal severity the first row wins.
pub fn position_risk(metrics: &DataFrame, colors: &ConditionColors) -> Vec<PositionRisk> {
    let Some(codes) = column_text(metrics, POSITION_CODE) else {
        return Vec::new();
    };
    let height = metrics.height();
    let labels = column_text(metrics, POSITION_LABEL).unwrap_or_else(|| vec![None; height]);
    let xs = numeric_column(metrics, POSITION_X).unwrap_or_else(|| vec![None; height]);
    let ys = numeric_column(metrics, POSITION_Y).unwrap_or_else(|| vec![None; height]);
    let conditions: Vec<Option<Condition>> = column_text(metrics, CONDITION)
        .map(|values| {
            values
                .iter()
                .map(|v| v.as_deref().and_then(Condition::from_label))
                .collect()
        })
        .unwrap_or_else(|| vec![None; height]);

    let mut entries: Vec<PositionRisk> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for (idx, code) in codes.into_iter().enumerate() {
        let Some(code) = code else {
            continue;
        };
        let entry = PositionRisk {
            code: code.clone(),
            label: labels[idx].clone(),
            x: xs[idx],
            y: ys[idx],
            condition: conditions[idx],
            color: colors.for_condition(conditions[idx]).to_string(),
        };
        match slot.get(&code) {
            Some(&existing) => {
                if severity(entry.condition) < severity(entries[existing].condition) {
                    entries[existing] = entry;
                }
            }
            None => {
                slot.insert(code, entries.len());
                entries.push(entry);
            }
        }
    }
    entries.sort_by_key(|entry| severity(entry.condition));
    entries
}

/// Write a view as comma-delimited text with a header row.
pub fn write_csv<W: Write>(view: &DataFrame, writer: W) -> Result<()> {
    let mut df = view.clone();
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)
        .map_err(|err| MetricsError::CsvWrite {
            message: err.to_string(),
        })
}
