//! Left join of position metadata onto the tires table.

use std::collections::HashMap;

use polars::prelude::{DataFrame, IdxCa, IdxSize, NewChunkedArray};
use tread_ingest::{column_text, has_column};
use tread_model::columns::POSITION_CODE;

use crate::error::Result;

/// Attach position columns (label, X, Y, ...) to each tire by position code.
///
/// Every tire row is kept; unmatched or missing codes get nulls. Codes are
/// compared as trimmed text so `7` and `"7"` match. When the position sheet
/// repeats a code, its first row is used. Columns already on the tires table
/// are not overwritten. If either table lacks the code column the tires table is
/// returned unchanged.
pub fn join_position(mut tires: DataFrame, position: &DataFrame) -> Result<DataFrame> {
    let (Some(tire_codes), Some(position_codes)) = (
        column_text(&tires, POSITION_CODE),
        column_text(position, POSITION_CODE),
    ) else {
        tracing::debug!("position code column missing, skipping position join");
        return Ok(tires);
    };

    let mut first_row: HashMap<String, IdxSize> = HashMap::with_capacity(position_codes.len());
    let mut duplicates = 0usize;
    for (idx, code) in position_codes.into_iter().enumerate() {
        let Some(code) = code else {
            continue;
        };
        if first_row.contains_key(&code) {
            duplicates += 1;
            continue;
        }
        first_row.insert(code, idx as IdxSize);
    }
    if duplicates > 0 {
        tracing::warn!(duplicates, "duplicate position codes ignored, first row kept");
    }

    let indices: Vec<Option<IdxSize>> = tire_codes
        .iter()
        .map(|code| code.as_ref().and_then(|c| first_row.get(c).copied()))
        .collect();
    let matched = indices.iter().filter(|idx| idx.is_some()).count();
    let gather = IdxCa::from_iter_options("position_row".into(), indices.into_iter());
    let joined = position.take(&gather)?;

    for column in joined.get_columns() {
        let name = column.name().as_str();
        if name == POSITION_CODE {
            continue;
        }
        if has_column(&tires, name) {
            tracing::debug!(column = name, "position column already on tires, not copied");
            continue;
        }
        tires.with_column(column.clone())?;
    }
    tracing::debug!(
        matched,
        unmatched = tires.height() - matched,
        "position join complete"
    );
    Ok(tires)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};
    use tread_ingest::any_to_text;

    fn tires() -> DataFrame {
        DataFrame::new(vec![
            Column::from(Series::new(
                "Referência".into(),
                vec!["P1", "P2", "P3", "P4"],
            )),
            Column::from(Series::new(
                POSITION_CODE.into(),
                vec![Some("DE1"), Some("TD2"), None, Some("ZZ9")],
            )),
        ])
        .unwrap()
    }

    fn position() -> DataFrame {
        DataFrame::new(vec![
            Column::from(Series::new(POSITION_CODE.into(), vec!["DE1", "TD2", "DE1"])),
            Column::from(Series::new(
                "Posição".into(),
                vec!["Dianteiro Esquerdo", "Traseiro Direito", "Duplicado"],
            )),
            Column::from(Series::new("X".into(), vec!["0", "2", "9"])),
        ])
        .unwrap()
    }

    fn text_at(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
        any_to_text(df.column(name).unwrap().get(idx).unwrap())
    }

    #[test]
    fn test_left_join_keeps_all_tires() {
        let joined = join_position(tires(), &position()).unwrap();
        assert_eq!(joined.height(), 4);
        assert_eq!(
            text_at(&joined, "Posição", 0),
            Some("Dianteiro Esquerdo".to_string())
        );
        assert_eq!(text_at(&joined, "X", 1), Some("2".to_string()));
        assert_eq!(text_at(&joined, "Posição", 2), None);
        assert_eq!(text_at(&joined, "Posição", 3), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let joined = join_position(tires(), &position()).unwrap();
        assert_eq!(text_at(&joined, "X", 0), Some("0".to_string()));
    }

    #[test]
    fn test_missing_code_column_is_noop() {
        let position = DataFrame::new(vec![Column::from(Series::new(
            "Posição".into(),
            vec!["Dianteiro"],
        ))])
        .unwrap();
        let joined = join_position(tires(), &position).unwrap();
        assert_eq!(joined.width(), 2);
    }

    #[test]
    fn test_existing_tire_columns_not_overwritten() {
        let tires = DataFrame::new(vec![
            Column::from(Series::new(POSITION_CODE.into(), vec!["DE1"])),
            Column::from(Series::new("X".into(), vec!["tire-x"])),
        ])
        .unwrap();
        let joined = join_position(tires, &position()).unwrap();
        assert_eq!(text_at(&joined, "X", 0), Some("tire-x".to_string()));
        assert_eq!(
            text_at(&joined, "Posição", 0),
            Some("Dianteiro Esquerdo".to_string())
        );
    }
}
