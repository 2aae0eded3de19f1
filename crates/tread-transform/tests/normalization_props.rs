use proptest::prelude::*;
use proptest::test_runner::Config;
use tread_transform::{
    classify_vehicle_type, extract_distance_from_text, normalize_text, parse_locale_text,
};

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn comma_decimal_parses(whole in 0_u64..1_000_000_u64, cents in 0_u64..100_u64) {
        let raw = format!("{whole},{cents:02}");
        let expected = whole as f64 + cents as f64 / 100.0;
        let parsed = parse_locale_text(&raw).expect("comma decimal");
        prop_assert!((parsed - expected).abs() < 1e-6);
    }

    #[test]
    fn grouped_comma_decimal_parses(whole in 1_000_u64..100_000_000_u64, tenth in 0_u64..10_u64) {
        let raw = format!("{},{tenth}", group_thousands(whole));
        let expected = whole as f64 + tenth as f64 / 10.0;
        let parsed = parse_locale_text(&raw).expect("grouped decimal");
        prop_assert!((parsed - expected).abs() < 1e-6);
    }

    #[test]
    fn km_reading_drops_thousands_dots(km in 0_u64..10_000_000_u64, pad in " {0,2}") {
        let text = format!("Aferido com {}{pad}km", group_thousands(km));
        prop_assert_eq!(extract_distance_from_text(Some(&text)), Some(km as f64));
    }

    #[test]
    fn normalize_text_is_idempotent(raw in "[a-zA-Z0-9áéíóúâêôãõçÁÉÍÓÚÂÊÔÃÕÇ /\\-]{0,24}") {
        let once = normalize_text(Some(&raw));
        let twice = normalize_text(Some(&once));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.chars().all(|c| !c.is_lowercase()));
    }

    #[test]
    fn vehicle_type_ignores_case(raw in "[a-zA-Z0-9 /\\-]{0,24}") {
        prop_assert_eq!(
            classify_vehicle_type(Some(&raw)),
            classify_vehicle_type(Some(&raw.to_uppercase()))
        );
    }
}
