//! Baseline tread resolution.
//!
//! Baseline data is sparse and keyed inconsistently, so the initial tread of a
//! tire is resolved through an ordered series of fill-if-missing passes, each
//! one coarser than the last:
//!
//! 1. exact (stage, model) match, first value in input order per key
//! 2. `NOVO` tires by model among `NOVO` baseline rows, first in input order
//! 3. median by model across all stages
//! 4. median by stage across all models
//! 5. global median
//!
//! A pass only touches rows that are still unresolved, so a more specific
//! match is never overwritten by a coarser one.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use serde::Serialize;
use tread_ingest::column_text;
use tread_model::columns::{BASELINE_TREAD, MODEL, STAGE};

use crate::frame::numeric_column;
use crate::normalization::normalize_text;

/// Normalized stage label for new (never recapped) tires.
pub const NEW_STAGE: &str = "NOVO";

/// One pass of the baseline cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineTier {
    ExactStageModel,
    NewByModel,
    ModelMedian,
    StageMedian,
    GlobalMedian,
}

impl BaselineTier {
    /// Passes in the order they are applied.
    pub const ORDER: [BaselineTier; 5] = [
        BaselineTier::ExactStageModel,
        BaselineTier::NewByModel,
        BaselineTier::ModelMedian,
        BaselineTier::StageMedian,
        BaselineTier::GlobalMedian,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BaselineTier::ExactStageModel => "exact stage+model",
            BaselineTier::NewByModel => "new tire by model",
            BaselineTier::ModelMedian => "model median",
            BaselineTier::StageMedian => "stage median",
            BaselineTier::GlobalMedian => "global median",
        }
    }
}

/// Normalized join keys for one tire row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TireKey {
    pub stage: String,
    pub model: String,
}

impl TireKey {
    pub fn new(stage: Option<&str>, model: Option<&str>) -> Self {
        Self {
            stage: normalize_text(stage),
            model: normalize_text(model),
        }
    }
}

/// Build normalized keys for every row of a frame. Missing columns yield empty keys.
pub fn frame_keys(df: &DataFrame) -> Vec<TireKey> {
    let height = df.height();
    let stages = column_text(df, STAGE).unwrap_or_else(|| vec![None; height]);
    let models = column_text(df, MODEL).unwrap_or_else(|| vec![None; height]);
    stages
        .iter()
        .zip(models.iter())
        .map(|(stage, model)| TireKey::new(stage.as_deref(), model.as_deref()))
        .collect()
}

/// A baseline row with a defined tread value.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineEntry {
    pub key: TireKey,
    pub tread_mm: f64,
}

/// Baseline reference rows in input order. Rows without a tread value are dropped.
#[derive(Debug, Clone, Default)]
pub struct BaselineTable {
    entries: Vec<BaselineEntry>,
}

impl BaselineTable {
    pub fn new(entries: Vec<BaselineEntry>) -> Self {
        Self { entries }
    }

    /// Read the baseline sheet (after aliasing): stage, model and tread columns.
    pub fn from_frame(df: &DataFrame) -> Self {
        let keys = frame_keys(df);
        let treads = numeric_column(df, BASELINE_TREAD).unwrap_or_default();
        let entries = keys
            .into_iter()
            .zip(treads)
            .filter_map(|(key, tread)| tread.map(|tread_mm| BaselineEntry { key, tread_mm }))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value per (stage, model), in input order.
    pub fn exact_lookup(&self) -> HashMap<(String, String), f64> {
        let mut lookup = HashMap::new();
        for entry in &self.entries {
            lookup
                .entry((entry.key.stage.clone(), entry.key.model.clone()))
                .or_insert(entry.tread_mm);
        }
        lookup
    }

    /// First `NOVO` value per model, in input order.
    pub fn new_by_model(&self) -> HashMap<String, f64> {
        let mut lookup = HashMap::new();
        for entry in self.entries.iter().filter(|e| e.key.stage == NEW_STAGE) {
            lookup.entry(entry.key.model.clone()).or_insert(entry.tread_mm);
        }
        lookup
    }

    /// Median per model across all stages.
    pub fn model_medians(&self) -> HashMap<String, f64> {
        grouped_medians(self.entries.iter().map(|e| (e.key.model.clone(), e.tread_mm)))
    }

    /// Median per stage across all models.
    pub fn stage_medians(&self) -> HashMap<String, f64> {
        grouped_medians(self.entries.iter().map(|e| (e.key.stage.clone(), e.tread_mm)))
    }

    /// Median of every baseline value, or None for an empty table.
    pub fn global_median(&self) -> Option<f64> {
        median(self.entries.iter().map(|e| e.tread_mm).collect())
    }
}

/// Rows filled by each pass, plus rows left unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaselineResolution {
    pub filled: Vec<(BaselineTier, usize)>,
    pub unresolved: usize,
}

impl BaselineResolution {
    pub fn filled_by(&self, tier: BaselineTier) -> usize {
        self.filled
            .iter()
            .find(|(t, _)| *t == tier)
            .map_or(0, |(_, count)| *count)
    }
}

/// Fill unresolved rows using a single tier. Returns the number of rows filled.
pub fn fill_tier(
    tier: BaselineTier,
    table: &BaselineTable,
    keys: &[TireKey],
    resolved: &mut [Option<f64>],
) -> usize {
    match tier {
        BaselineTier::ExactStageModel => {
            let lookup = table.exact_lookup();
            fill_where(keys, resolved, |key| {
                lookup.get(&(key.stage.clone(), key.model.clone())).copied()
            })
        }
        BaselineTier::NewByModel => {
            let lookup = table.new_by_model();
            fill_where(keys, resolved, |key| {
                if key.stage == NEW_STAGE {
                    lookup.get(&key.model).copied()
                } else {
                    None
                }
            })
        }
        BaselineTier::ModelMedian => {
            let lookup = table.model_medians();
            fill_where(keys, resolved, |key| lookup.get(&key.model).copied())
        }
        BaselineTier::StageMedian => {
            let lookup = table.stage_medians();
            fill_where(keys, resolved, |key| lookup.get(&key.stage).copied())
        }
        BaselineTier::GlobalMedian => {
            let global = table.global_median();
            fill_where(keys, resolved, |_| global)
        }
    }
}

/// Run every tier in order over the given keys.
pub fn resolve_baseline(
    table: &BaselineTable,
    keys: &[TireKey],
) -> (Vec<Option<f64>>, BaselineResolution) {
    let mut resolved = vec![None; keys.len()];
    let mut resolution = BaselineResolution::default();
    for tier in BaselineTier::ORDER {
        let count = fill_tier(tier, table, keys, &mut resolved);
        tracing::debug!(tier = tier.label(), filled = count, "baseline tier applied");
        resolution.filled.push((tier, count));
    }
    resolution.unresolved = resolved.iter().filter(|v| v.is_none()).count();
    (resolved, resolution)
}

fn fill_where<F>(keys: &[TireKey], resolved: &mut [Option<f64>], lookup: F) -> usize
where
    F: Fn(&TireKey) -> Option<f64>,
{
    let mut filled = 0;
    for (slot, key) in resolved.iter_mut().zip(keys) {
        if slot.is_none()
            && let Some(value) = lookup(key)
        {
            *slot = Some(value);
            filled += 1;
        }
    }
    filled
}

fn grouped_medians<I>(pairs: I) -> HashMap<String, f64>
where
    I: Iterator<Item = (String, f64)>,
{
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups
        .into_iter()
        .filter_map(|(key, values)| median(values).map(|m| (key, m)))
        .collect()
}

/// Median with the mean of the two middle values for even counts.
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
