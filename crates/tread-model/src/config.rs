//! Pipeline configuration.
//!
//! Every invocation receives its configuration explicitly, so repeated runs with
//! different thresholds never interfere. All structs deserialize with defaults,
//! which lets a TOML file override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::{ConfigError, Result};

/// Sheet holding one row per tire.
pub const SHEET_TIRES: &str = "pneus";
/// Sheet mapping position codes to labels and layout coordinates.
pub const SHEET_POSITION: &str = "posição";
/// Sheet holding baseline tread depth per (stage, model).
pub const SHEET_BASELINE: &str = "sulco";

/// Sheets a workbook must contain, in sorted order.
pub const REQUIRED_SHEETS: [&str; 3] = [SHEET_TIRES, SHEET_POSITION, SHEET_BASELINE];

/// Tread depth thresholds in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// At or below this depth a tire is critical.
    pub critical_mm: f64,
    /// At or below this depth (and above critical) a tire is in alert.
    pub alert_mm: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical_mm: 2.0,
            alert_mm: 4.0,
        }
    }
}

impl Thresholds {
    pub fn new(critical_mm: f64, alert_mm: f64) -> Result<Self> {
        let thresholds = Self {
            critical_mm,
            alert_mm,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that both thresholds are finite and `alert_mm > critical_mm`.
    pub fn validate(&self) -> Result<()> {
        let finite = self.critical_mm.is_finite() && self.alert_mm.is_finite();
        if !finite || self.alert_mm <= self.critical_mm {
            return Err(ConfigError::InvalidThresholds {
                critical_mm: self.critical_mm,
                alert_mm: self.alert_mm,
            });
        }
        Ok(())
    }
}

/// Unit costs used by the replacement budget estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSettings {
    /// Price of one replacement tire.
    pub unit_tire_cost: f64,
    /// Cost of one hour of vehicle downtime.
    pub downtime_hour_cost: f64,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            unit_tire_cost: 1200.0,
            downtime_hour_cost: 300.0,
        }
    }
}

impl CostSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.unit_tire_cost.is_finite() {
            return Err(ConfigError::InvalidCost {
                field: "unit_tire_cost",
                value: self.unit_tire_cost,
            });
        }
        if !self.downtime_hour_cost.is_finite() {
            return Err(ConfigError::InvalidCost {
                field: "downtime_hour_cost",
                value: self.downtime_hour_cost,
            });
        }
        Ok(())
    }
}

/// Display colors per condition (hex RGB).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionColors {
    pub ok: String,
    pub alert: String,
    pub critical: String,
    /// Used for rows without a condition.
    pub neutral: String,
}

impl Default for ConditionColors {
    fn default() -> Self {
        Self {
            ok: "#6BCB77".to_string(),
            alert: "#FFD93D".to_string(),
            critical: "#FF6B6B".to_string(),
            neutral: "#e6e6e6".to_string(),
        }
    }
}

impl ConditionColors {
    pub fn for_condition(&self, condition: Option<Condition>) -> &str {
        match condition {
            Some(Condition::Critical) => &self.critical,
            Some(Condition::Alert) => &self.alert,
            Some(Condition::Ok) => &self.ok,
            None => &self.neutral,
        }
    }
}

/// Complete configuration for one pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub thresholds: Thresholds,
    pub costs: CostSettings,
    pub colors: ConditionColors,
}

impl PipelineConfig {
    /// Parses a TOML document. Missing tables and fields keep their defaults.
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source, path)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        self.costs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.thresholds.critical_mm, 2.0);
        assert_eq!(config.thresholds.alert_mm, 4.0);
        assert_eq!(config.costs.unit_tire_cost, 1200.0);
        assert_eq!(config.costs.downtime_hour_cost, 300.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_thresholds_must_increase() {
        assert!(Thresholds::new(3.0, 3.0).is_err());
        assert!(Thresholds::new(4.0, 2.0).is_err());
        assert!(Thresholds::new(f64::NAN, 4.0).is_err());
        assert!(Thresholds::new(1.5, 3.0).is_ok());
    }

    #[test]
    fn test_cost_must_be_finite() {
        let costs = CostSettings {
            unit_tire_cost: f64::INFINITY,
            ..CostSettings::default()
        };
        assert!(matches!(
            costs.validate(),
            Err(ConfigError::InvalidCost {
                field: "unit_tire_cost",
                ..
            })
        ));
    }

    #[test]
    fn test_color_lookup() {
        let colors = ConditionColors::default();
        assert_eq!(colors.for_condition(Some(Condition::Critical)), "#FF6B6B");
        assert_eq!(colors.for_condition(None), "#e6e6e6");
    }
}
