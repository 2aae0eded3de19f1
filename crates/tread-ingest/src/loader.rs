//! Required-sheet validation and header cleanup.

use std::collections::HashSet;

use polars::prelude::{DataFrame, PlSmallStr};
use tread_model::{REQUIRED_SHEETS, SHEET_BASELINE, SHEET_POSITION, SHEET_TIRES};

use crate::error::{IngestError, Result};
use crate::workbook::Workbook;

/// The three sheets the transform pipeline consumes, with trimmed headers.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub tires: DataFrame,
    pub position: DataFrame,
    pub baseline_tread: DataFrame,
}

/// Extracts the required sheets from a workbook.
///
/// Fails with [`IngestError::MissingSheets`] naming every absent sheet. Cell
/// values are not inspected here.
pub fn load_tables(workbook: &Workbook) -> Result<SourceTables> {
    let missing: Vec<String> = REQUIRED_SHEETS
        .iter()
        .filter(|name| !workbook.contains(name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingSheets {
            missing,
            required: REQUIRED_SHEETS.iter().map(|s| (*s).to_string()).collect(),
        });
    }

    let tables = SourceTables {
        tires: trimmed_sheet(workbook, SHEET_TIRES)?,
        position: trimmed_sheet(workbook, SHEET_POSITION)?,
        baseline_tread: trimmed_sheet(workbook, SHEET_BASELINE)?,
    };
    tracing::info!(
        tires = tables.tires.height(),
        positions = tables.position.height(),
        baseline_rows = tables.baseline_tread.height(),
        "required sheets loaded"
    );
    Ok(tables)
}

fn trimmed_sheet(workbook: &Workbook, name: &str) -> Result<DataFrame> {
    let mut df = workbook
        .sheet(name)
        .cloned()
        .ok_or_else(|| IngestError::MissingSheets {
            missing: vec![name.to_string()],
            required: REQUIRED_SHEETS.iter().map(|s| (*s).to_string()).collect(),
        })?;
    trim_column_names(&mut df)?;
    Ok(df)
}

/// Strips leading and trailing whitespace from every column header.
///
/// When two headers trim to the same name the first column is kept and the
/// later one is dropped with a warning.
pub fn trim_column_names(df: &mut DataFrame) -> Result<()> {
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let trimmed = column.name().trim();
        if !seen.insert(trimmed.to_string()) {
            tracing::warn!(
                column = %column.name(),
                kept = trimmed,
                "dropping column whose trimmed header repeats an earlier one"
            );
            continue;
        }
        let mut column = column.clone();
        column.rename(PlSmallStr::from(trimmed));
        columns.push(column);
    }
    *df = DataFrame::new(columns)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec!["a"]).into())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_trim_column_names() {
        let mut df = frame(&[" Vida ", "Modelo (Atual)\t"]);
        trim_column_names(&mut df).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Vida", "Modelo (Atual)"]);
    }

    #[test]
    fn test_trim_collision_keeps_first() {
        let mut df = DataFrame::new(vec![
            Series::new("Vida".into(), vec!["NOVO"]).into(),
            Series::new("Vida ".into(), vec!["RECAPADO 1"]).into(),
            Series::new(" Modelo".into(), vec!["XZE"]).into(),
        ])
        .unwrap();
        trim_column_names(&mut df).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Vida", "Modelo"]);
        assert_eq!(df.column("Vida").unwrap().str().unwrap().get(0), Some("NOVO"));
    }

    #[test]
    fn test_missing_sheets_listed() {
        let workbook = Workbook::from_sheets([("pneus", frame(&["Vida"]))]);
        let err = load_tables(&workbook).unwrap_err();
        match err {
            IngestError::MissingSheets { missing, .. } => {
                assert_eq!(missing, vec!["posição".to_string(), "sulco".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_tables_trims_every_sheet() {
        let workbook = Workbook::from_sheets([
            ("pneus", frame(&[" Aferição - Sulco"])),
            ("posição", frame(&["Sigla "])),
            ("sulco", frame(&[" SULCO "])),
            ("extra", frame(&["ignored"])),
        ]);
        let tables = load_tables(&workbook).unwrap();
        assert!(tables.tires.column("Aferição - Sulco").is_ok());
        assert!(tables.position.column("Sigla").is_ok());
        assert!(tables.baseline_tread.column("SULCO").is_ok());
    }
}
