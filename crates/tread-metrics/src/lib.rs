//! Wear metrics and fleet summaries.
//!
//! [`compute_metrics`] adds consumed tread, wear rate, percent remaining,
//! condition and remaining distance to the enriched tires table. The summary and
//! view functions work on that metrics table, usually after a [`RowFilter`].

pub mod engine;
pub mod error;
pub mod filter;
pub mod summary;
pub mod views;

pub use engine::{TireMetrics, classify_condition, compute_metrics, round_to};
pub use error::{MetricsError, Result};
pub use filter::RowFilter;
pub use summary::{
    ConditionCount, CostEstimate, Kpis, compute_kpis, condition_counts, estimate_costs,
};
pub use views::{PositionRisk, at_risk_view, full_view, position_risk, write_csv};
