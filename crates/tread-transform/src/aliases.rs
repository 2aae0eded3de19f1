//! Column-name aliasing for spelling variants across sheets.

use polars::prelude::DataFrame;
use tread_ingest::has_column;
use tread_model::columns::COLUMN_ALIASES;

use crate::error::Result;

/// Rename known spelling variants to their canonical column names.
///
/// An alias is skipped when the canonical name is already present, so an
/// explicit canonical column always wins. Returns the number of renames.
pub fn apply_column_aliases(df: &mut DataFrame) -> Result<usize> {
    let mut renamed = 0;
    for (alias, canonical) in COLUMN_ALIASES {
        if has_column(df, alias) && !has_column(df, canonical) {
            df.rename(alias, (*canonical).into())?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec!["v"]).into())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_aliases_renamed() {
        let mut df = frame(&["Modelo", "SULCO", "SIGLA", "POSIÇÃO"]);
        let renamed = apply_column_aliases(&mut df).unwrap();
        assert_eq!(renamed, 4);
        assert_eq!(
            names(&df),
            vec!["Modelo (Atual)", "Sulco", "Sigla da Posição", "Posição"]
        );
    }

    #[test]
    fn test_canonical_wins_over_alias() {
        let mut df = frame(&["Sigla", "SIGLA"]);
        apply_column_aliases(&mut df).unwrap();
        // "Sigla" becomes canonical; "SIGLA" is left alone.
        assert_eq!(names(&df), vec!["Sigla da Posição", "SIGLA"]);
    }

    #[test]
    fn test_no_aliases() {
        let mut df = frame(&["Vida"]);
        assert_eq!(apply_column_aliases(&mut df).unwrap(), 0);
    }
}
