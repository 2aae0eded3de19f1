//! Configuration layering: defaults, then an optional TOML file, then flags.

use std::path::Path;

use tread_model::{PipelineConfig, Result};

/// Values given on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub critical_mm: Option<f64>,
    pub alert_mm: Option<f64>,
    pub unit_tire_cost: Option<f64>,
    pub downtime_hour_cost: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(value) = self.critical_mm {
            config.thresholds.critical_mm = value;
        }
        if let Some(value) = self.alert_mm {
            config.thresholds.alert_mm = value;
        }
        if let Some(value) = self.unit_tire_cost {
            config.costs.unit_tire_cost = value;
        }
        if let Some(value) = self.downtime_hour_cost {
            config.costs.downtime_hour_cost = value;
        }
    }
}

/// Build and validate the effective configuration.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::from_path(path)?,
        None => PipelineConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate()?;
    tracing::debug!(
        critical_mm = config.thresholds.critical_mm,
        alert_mm = config.thresholds.alert_mm,
        unit_tire_cost = config.costs.unit_tire_cost,
        downtime_hour_cost = config.costs.downtime_hour_cost,
        "configuration resolved"
    );
    Ok(config)
}
