//! Fleet-level KPIs, condition counts and the replacement cost estimate.

use std::collections::HashSet;

use polars::prelude::DataFrame;
use serde::Serialize;
use tread_ingest::column_text;
use tread_model::columns::{CONDITION, REFERENCE, STATUS, STATUS_SCRAP, STATUS_STOCK, STATUS_TRUCK};
use tread_model::{Condition, CostSettings};

/// Headline numbers for a (possibly filtered) metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    /// Distinct tire references, or the row count without a reference column.
    pub total: usize,
    pub critical: usize,
    pub alert: usize,
    pub ok: usize,
    pub stock: usize,
    pub scrap: usize,
    pub truck: usize,
    pub percent_critical: f64,
    pub percent_alert: f64,
}

/// Number of tires in one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionCount {
    pub condition: Condition,
    pub count: usize,
}

/// Immediate replacement budget for critical tires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub critical_count: usize,
    pub replacement_cost: f64,
    /// One hour of downtime per critical tire.
    pub downtime_cost: f64,
}

fn conditions(metrics: &DataFrame) -> Vec<Option<Condition>> {
    column_text(metrics, CONDITION)
        .map(|labels| {
            labels
                .iter()
                .map(|label| label.as_deref().and_then(Condition::from_label))
                .collect()
        })
        .unwrap_or_default()
}

/// Counts per condition, most severe first, including zero counts.
pub fn condition_counts(metrics: &DataFrame) -> Vec<ConditionCount> {
    let observed = conditions(metrics);
    Condition::ALL
        .into_iter()
        .map(|condition| ConditionCount {
            condition,
            count: observed.iter().filter(|c| **c == Some(condition)).count(),
        })
        .collect()
}

fn count_status(statuses: Option<&[Option<String>]>, wanted: &str) -> usize {
    statuses.map_or(0, |values| {
        values
            .iter()
            .filter(|value| value.as_deref() == Some(wanted))
            .count()
    })
}

/// Share of `total` in percent, rounded to one decimal on the exact binary value.
fn percent(part: usize, total: usize) -> f64 {
    let value = 100.0 * part as f64 / total.max(1) as f64;
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Compute the KPI summary of a metrics table.
pub fn compute_kpis(metrics: &DataFrame) -> Kpis {
    let total = match column_text(metrics, REFERENCE) {
        Some(references) => references.iter().flatten().collect::<HashSet<_>>().len(),
        None => metrics.height(),
    };
    let counts = condition_counts(metrics);
    let count_of = |condition: Condition| {
        counts
            .iter()
            .find(|c| c.condition == condition)
            .map_or(0, |c| c.count)
    };
    let critical = count_of(Condition::Critical);
    let alert = count_of(Condition::Alert);
    let statuses = column_text(metrics, STATUS);

    let kpis = Kpis {
        total,
        critical,
        alert,
        ok: count_of(Condition::Ok),
        stock: count_status(statuses.as_deref(), STATUS_STOCK),
        scrap: count_status(statuses.as_deref(), STATUS_SCRAP),
        truck: count_status(statuses.as_deref(), STATUS_TRUCK),
        percent_critical: percent(critical, total),
        percent_alert: percent(alert, total),
    };
    tracing::debug!(total, critical, alert, "kpis computed");
    kpis
}

/// Estimate the cost of replacing every critical tire now.
///
/// Negative unit costs are treated as zero.
pub fn estimate_costs(metrics: &DataFrame, costs: &CostSettings) -> CostEstimate {
    let critical_count = conditions(metrics)
        .iter()
        .filter(|c| **c == Some(Condition::Critical))
        .count();
    let quantity = critical_count as f64;
    CostEstimate {
        critical_count,
        replacement_cost: quantity * costs.unit_tire_cost.max(0.0),
        downtime_cost: quantity * costs.downtime_hour_cost.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(conditions: Vec<Option<&str>>) -> DataFrame {
        DataFrame::new(vec![Column::from(Series::new(CONDITION.into(), conditions))]).unwrap()
    }

    #[test]
    fn test_condition_counts_include_zeros() {
        let df = frame(vec![Some("Alerta"), None, Some("Alerta")]);
        let counts = condition_counts(&df);
        assert_eq!(
            counts,
            vec![
                ConditionCount {
                    condition: Condition::Critical,
                    count: 0
                },
                ConditionCount {
                    condition: Condition::Alert,
                    count: 2
                },
                ConditionCount {
                    condition: Condition::Ok,
                    count: 0
                },
            ]
        );
    }

    #[test]
    fn test_kpis_without_reference_or_status() {
        let df = frame(vec![Some("Crítico"), Some("Ok"), Some("Ok")]);
        let kpis = compute_kpis(&df);
        assert_eq!(kpis.total, 3);
        assert_eq!(kpis.critical, 1);
        assert_eq!(kpis.stock, 0);
        assert_eq!(kpis.percent_critical, 33.3);
        assert_eq!(kpis.percent_alert, 0.0);
    }

    #[test]
    fn test_percent_rounds_exact_value() {
        // 1.15 is stored just below the tie, so it rounds down.
        let mut labels = vec![Some("Crítico"); 23];
        labels.extend(vec![Some("Ok"); 1977]);
        let kpis = compute_kpis(&frame(labels));
        assert_eq!(kpis.total, 2000);
        assert_eq!(kpis.percent_critical, 1.1);
        assert_eq!(percent(1, 8), 12.5);
        assert_eq!(percent(2, 3), 66.7);
    }

    #[test]
    fn test_empty_table() {
        let kpis = compute_kpis(&DataFrame::empty());
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.percent_critical, 0.0);
        assert_eq!(estimate_costs(&DataFrame::empty(), &CostSettings::default()).critical_count, 0);
    }

    #[test]
    fn test_costs_for_three_critical() {
        let df = frame(vec![
            Some("Crítico"),
            Some("Crítico"),
            Some("Alerta"),
            Some("Crítico"),
        ]);
        let estimate = estimate_costs(&df, &CostSettings::default());
        assert_eq!(estimate.critical_count, 3);
        assert_eq!(estimate.replacement_cost, 3600.0);
        assert_eq!(estimate.downtime_cost, 900.0);
    }

    #[test]
    fn test_negative_costs_clamped() {
        let df = frame(vec![Some("Crítico")]);
        let costs = CostSettings {
            unit_tire_cost: -10.0,
            downtime_hour_cost: 50.0,
        };
        let estimate = estimate_costs(&df, &costs);
        assert_eq!(estimate.replacement_cost, 0.0);
        assert_eq!(estimate.downtime_cost, 50.0);
    }
}
