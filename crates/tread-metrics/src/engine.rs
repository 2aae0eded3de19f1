//! Per-tire wear metrics and risk condition.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tread_model::columns::{
    CONDITION, CONSUMED_TREAD, DISTANCE_TRAVELED, INITIAL_TREAD, MEASURED_TREAD,
    PERCENT_REMAINING, REMAINING_DISTANCE, WEAR_RATE,
};
use tread_model::{Condition, Thresholds};
use tread_transform::frame::{numeric_column, set_f64_column};

use crate::error::Result;

/// Round half to even at `decimals` places, matching spreadsheet exports.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Classify a measured tread depth. Boundaries belong to the more severe bin.
pub fn classify_condition(measured_mm: f64, thresholds: &Thresholds) -> Condition {
    if measured_mm <= thresholds.critical_mm {
        Condition::Critical
    } else if measured_mm <= thresholds.alert_mm {
        Condition::Alert
    } else {
        Condition::Ok
    }
}

/// Metrics for a single tire.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TireMetrics {
    pub consumed_mm: Option<f64>,
    pub wear_rate: Option<f64>,
    pub percent_remaining: Option<f64>,
    pub condition: Option<Condition>,
    pub remaining_km: Option<f64>,
}

impl TireMetrics {
    /// Derive metrics from baseline tread, measured tread and traveled distance.
    ///
    /// Undefined inputs and zero denominators yield undefined outputs.
    pub fn compute(
        initial_mm: Option<f64>,
        measured_mm: Option<f64>,
        distance_km: Option<f64>,
        thresholds: &Thresholds,
    ) -> Self {
        let consumed_mm = initial_mm.zip(measured_mm).map(|(i, m)| i - m);
        let wear_rate = consumed_mm
            .zip(distance_km.filter(|d| *d > 0.0))
            .map(|(consumed, distance)| consumed / distance)
            .filter(|rate| rate.is_finite());
        let percent_remaining = measured_mm
            .zip(initial_mm.filter(|i| *i != 0.0))
            .map(|(m, i)| round_to(m / i * 100.0, 1))
            .filter(|pct| pct.is_finite());
        let condition = measured_mm.map(|m| classify_condition(m, thresholds));
        let remaining_km = measured_mm
            .zip(wear_rate.filter(|rate| *rate > 0.0))
            .map(|(m, rate)| ((m - thresholds.critical_mm) / rate).round_ties_even())
            .filter(|km| km.is_finite());
        Self {
            consumed_mm,
            wear_rate,
            percent_remaining,
            condition,
            remaining_km,
        }
    }
}

/// Add wear metrics and condition to the enriched tires table.
///
/// Returns a new table; missing input columns are treated as all-undefined.
pub fn compute_metrics(enriched: &DataFrame, thresholds: &Thresholds) -> Result<DataFrame> {
    let height = enriched.height();
    let read = |name: &str| numeric_column(enriched, name).unwrap_or_else(|| vec![None; height]);
    let initial = read(INITIAL_TREAD);
    let measured = read(MEASURED_TREAD);
    let distance = read(DISTANCE_TRAVELED);

    let rows: Vec<TireMetrics> = (0..height)
        .map(|idx| TireMetrics::compute(initial[idx], measured[idx], distance[idx], thresholds))
        .collect();

    let mut df = enriched.clone();
    set_f64_column(&mut df, CONSUMED_TREAD, rows.iter().map(|r| r.consumed_mm).collect())?;
    set_f64_column(&mut df, WEAR_RATE, rows.iter().map(|r| r.wear_rate).collect())?;
    set_f64_column(
        &mut df,
        PERCENT_REMAINING,
        rows.iter().map(|r| r.percent_remaining).collect(),
    )?;
    let labels: Vec<Option<&str>> = rows
        .iter()
        .map(|r| r.condition.map(Condition::label))
        .collect();
    df.with_column(Series::new(CONDITION.into(), labels))?;
    set_f64_column(
        &mut df,
        REMAINING_DISTANCE,
        rows.iter().map(|r| r.remaining_km).collect(),
    )?;

    let classified = rows.iter().filter(|r| r.condition.is_some()).count();
    tracing::info!(rows = height, classified, "metrics computed");
    Ok(df)
}
