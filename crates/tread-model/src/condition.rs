//! Tire risk condition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Risk classification derived from measured tread depth.
///
/// Variants are declared from most to least severe, so the derived ordering
/// gives `Critical < Alert < Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Tread at or below the critical threshold: replace now.
    #[serde(rename = "Crítico")]
    Critical,
    /// Tread above critical but at or below the alert threshold.
    #[serde(rename = "Alerta")]
    Alert,
    /// Tread above the alert threshold.
    #[serde(rename = "Ok")]
    Ok,
}

impl Condition {
    /// All conditions, most severe first.
    pub const ALL: [Condition; 3] = [Condition::Critical, Condition::Alert, Condition::Ok];

    /// Display label as it appears in the condition column.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Critical => "Crítico",
            Condition::Alert => "Alerta",
            Condition::Ok => "Ok",
        }
    }

    /// Returns true for conditions that belong in the at-risk export.
    pub fn is_at_risk(self) -> bool {
        matches!(self, Condition::Critical | Condition::Alert)
    }

    /// Looks up a condition by its label, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == trimmed)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown condition '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(Condition::Critical < Condition::Alert);
        assert!(Condition::Alert < Condition::Ok);
    }

    #[test]
    fn test_label_roundtrip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(Condition::from_label(" Alerta "), Some(Condition::Alert));
        assert_eq!(Condition::from_label("alerta"), None);
    }

    #[test]
    fn test_at_risk() {
        assert!(Condition::Critical.is_at_risk());
        assert!(Condition::Alert.is_at_risk());
        assert!(!Condition::Ok.is_at_risk());
    }
}
