//! Row selection over the metrics table.

use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use serde::Serialize;
use tread_ingest::column_text;
use tread_model::columns::{BRAND, PLATE, STAGE, STATUS, VEHICLE_TYPE};

use crate::error::Result;

/// Accepted values per column. An empty set does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowFilter {
    pub status: BTreeSet<String>,
    pub plate: BTreeSet<String>,
    pub vehicle_type: BTreeSet<String>,
    pub brand: BTreeSet<String>,
    pub stage: BTreeSet<String>,
}

fn value_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl RowFilter {
    pub fn with_status<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        self.status = value_set(values);
        self
    }

    pub fn with_plate<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        self.plate = value_set(values);
        self
    }

    pub fn with_vehicle_type<I: IntoIterator<Item = S>, S: AsRef<str>>(
        mut self,
        values: I,
    ) -> Self {
        self.vehicle_type = value_set(values);
        self
    }

    pub fn with_brand<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        self.brand = value_set(values);
        self
    }

    pub fn with_stage<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        self.stage = value_set(values);
        self
    }

    fn criteria(&self) -> [(&'static str, &BTreeSet<String>); 5] {
        [
            (STATUS, &self.status),
            (PLATE, &self.plate),
            (VEHICLE_TYPE, &self.vehicle_type),
            (BRAND, &self.brand),
            (STAGE, &self.stage),
        ]
    }

    /// Returns true when no column is constrained.
    pub fn is_empty(&self) -> bool {
        self.criteria().iter().all(|(_, accepted)| accepted.is_empty())
    }

    /// Keep rows whose cells are in every non-empty set.
    ///
    /// Sets for columns absent from the table are ignored.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        if self.is_empty() {
            return Ok(df.clone());
        }
        let mut keep = vec![true; df.height()];
        for (column, accepted) in self.criteria() {
            if accepted.is_empty() {
                continue;
            }
            let Some(cells) = column_text(df, column) else {
                tracing::debug!(column, "filter column missing, ignored");
                continue;
            };
            for (flag, cell) in keep.iter_mut().zip(cells) {
                *flag = *flag && cell.is_some_and(|value| accepted.contains(&value));
            }
        }
        let mask = BooleanChunked::from_iter_values("keep".into(), keep.into_iter());
        let filtered = df.filter(&mask)?;
        tracing::debug!(before = df.height(), after = filtered.height(), "rows filtered");
        Ok(filtered)
    }
}
