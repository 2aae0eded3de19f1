//! Vehicle type classification labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vehicle category inferred from the free-text vehicle description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Leve")]
    Light,
    #[serde(rename = "Utilitário (Renault)")]
    UtilityRenault,
    #[serde(rename = "Utilitário (Iveco/Scudo)")]
    UtilityIvecoScudo,
    #[serde(rename = "3/4")]
    ThreeQuarter,
    #[serde(rename = "Toco")]
    Toco,
    #[serde(rename = "Truck")]
    Truck,
    #[serde(rename = "Carreta")]
    Trailer,
    #[serde(rename = "Outro")]
    Other,
}

impl VehicleType {
    /// Label written to the vehicle type column.
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Light => "Leve",
            VehicleType::UtilityRenault => "Utilitário (Renault)",
            VehicleType::UtilityIvecoScudo => "Utilitário (Iveco/Scudo)",
            VehicleType::ThreeQuarter => "3/4",
            VehicleType::Toco => "Toco",
            VehicleType::Truck => "Truck",
            VehicleType::Trailer => "Carreta",
            VehicleType::Other => "Outro",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
