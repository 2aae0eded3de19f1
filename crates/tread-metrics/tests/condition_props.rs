use proptest::prelude::*;
use proptest::test_runner::Config;
use tread_metrics::{TireMetrics, classify_condition};
use tread_model::{Condition, Thresholds};

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn condition_bins_partition_depths(
        measured in -10.0_f64..40.0,
        critical in 0.0_f64..5.0,
        gap in 0.01_f64..5.0
    ) {
        let thresholds = Thresholds::new(critical, critical + gap).expect("valid thresholds");
        let condition = classify_condition(measured, &thresholds);
        let expected = if measured <= thresholds.critical_mm {
            Condition::Critical
        } else if measured <= thresholds.alert_mm {
            Condition::Alert
        } else {
            Condition::Ok
        };
        prop_assert_eq!(condition, expected);
    }

    #[test]
    fn condition_defined_exactly_when_measured(
        initial in proptest::option::of(0.0_f64..30.0),
        measured in proptest::option::of(0.0_f64..30.0),
        distance in proptest::option::of(-1000.0_f64..100_000.0)
    ) {
        let m = TireMetrics::compute(initial, measured, distance, &Thresholds::default());
        prop_assert_eq!(m.condition.is_some(), measured.is_some());
        if m.wear_rate.is_some() || m.remaining_km.is_some() {
            prop_assert!(distance.is_some_and(|d| d > 0.0));
        }
        if let Some(pct) = m.percent_remaining {
            prop_assert!(pct.is_finite());
        }
    }
}
