//! Vehicle type classification from free-text descriptions.

use tread_model::VehicleType;

/// A substring rule: any marker present in the lower-cased description matches.
#[derive(Debug, Clone, Copy)]
pub struct VehicleRule {
    pub markers: &'static [&'static str],
    pub vehicle_type: VehicleType,
}

impl VehicleRule {
    pub fn matches(&self, description: &str) -> bool {
        self.markers.iter().any(|marker| description.contains(marker))
    }
}

/// Rules in priority order; the first match wins.
///
/// Order matters: a "Daily 3/4" is a utility, not a 3/4 truck.
pub const VEHICLE_RULES: &[VehicleRule] = &[
    VehicleRule {
        markers: &["saveiro"],
        vehicle_type: VehicleType::Light,
    },
    VehicleRule {
        markers: &["renault"],
        vehicle_type: VehicleType::UtilityRenault,
    },
    VehicleRule {
        markers: &["iveco", "daily", "dayli", "scudo"],
        vehicle_type: VehicleType::UtilityIvecoScudo,
    },
    VehicleRule {
        markers: &["3/4", "3-4"],
        vehicle_type: VehicleType::ThreeQuarter,
    },
    VehicleRule {
        markers: &["toco"],
        vehicle_type: VehicleType::Toco,
    },
    VehicleRule {
        markers: &["truck"],
        vehicle_type: VehicleType::Truck,
    },
    VehicleRule {
        markers: &["cavalo", "carreta"],
        vehicle_type: VehicleType::Trailer,
    },
];

/// Classify a vehicle description. Missing or unmatched descriptions are `Outro`.
pub fn classify_vehicle_type(description: Option<&str>) -> VehicleType {
    let Some(description) = description else {
        return VehicleType::Other;
    };
    let lowered = description.to_lowercase();
    VEHICLE_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(VehicleType::Other, |rule| rule.vehicle_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        let cases = [
            ("VW SAVEIRO 1.6", VehicleType::Light),
            ("Renault Master", VehicleType::UtilityRenault),
            ("IVECO 35S14", VehicleType::UtilityIvecoScudo),
            ("Fiat Scudo", VehicleType::UtilityIvecoScudo),
            ("Dayli 70C", VehicleType::UtilityIvecoScudo),
            ("VW 3-4 Delivery", VehicleType::ThreeQuarter),
            ("MB 1718 Toco", VehicleType::Toco),
            ("Volvo VM Truck 6x2", VehicleType::Truck),
            ("Cavalo Mecânico FH", VehicleType::Trailer),
            ("Van Sprinter", VehicleType::Other),
        ];
        for (description, expected) in cases {
            assert_eq!(
                classify_vehicle_type(Some(description)),
                expected,
                "{description}"
            );
        }
    }

    #[test]
    fn test_priority_order() {
        // Both "daily" and "3/4" appear; the utility rule comes first.
        assert_eq!(
            classify_vehicle_type(Some("Iveco Daily 3/4")),
            VehicleType::UtilityIvecoScudo
        );
        // "truck" and "carreta" both appear; truck wins.
        assert_eq!(
            classify_vehicle_type(Some("Truck com carreta")),
            VehicleType::Truck
        );
    }

    #[test]
    fn test_missing_description() {
        assert_eq!(classify_vehicle_type(None), VehicleType::Other);
    }
}
