use almanac::{calculate_chinese_sign, calculate_mayan_sign};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn iso(offset: i64) -> String {
    let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset);
    date.format("%Y-%m-%d").to_string()
}

proptest! {
    #[test]
    fn mayan_sign_is_pure(offset in 0i64..70_000) {
        let date = iso(offset);
        prop_assert_eq!(calculate_mayan_sign(&date).unwrap(), calculate_mayan_sign(&date).unwrap());
    }

    #[test]
    fn chinese_sign_is_pure(offset in 0i64..70_000) {
        let date = iso(offset);
        prop_assert_eq!(calculate_chinese_sign(&date).unwrap(), calculate_chinese_sign(&date).unwrap());
    }

    #[test]
    fn consecutive_days_advance_both_cycles(offset in 0i64..70_000) {
        let today = calculate_mayan_sign(&iso(offset)).unwrap();
        let tomorrow = calculate_mayan_sign(&iso(offset + 1)).unwrap();
        prop_assert_eq!(today.nawal.cyclic_distance(tomorrow.nawal), 1);
        prop_assert_eq!(tomorrow.tone, today.tone % 13 + 1);
        prop_assert_eq!(tomorrow.day_number, today.day_number % 260 + 1);
        prop_assert!((1..=13).contains(&today.tone));
    }

    #[test]
    fn cycle_repeats_every_260_days(offset in 0i64..70_000) {
        prop_assert_eq!(
            calculate_mayan_sign(&iso(offset)).unwrap(),
            calculate_mayan_sign(&iso(offset + 260)).unwrap()
        );
    }
}

#[test]
fn test_sign_serializes_kiche_names() {
    let sign = calculate_mayan_sign("1990-07-29").unwrap();
    let json = serde_json::to_value(sign).unwrap();
    assert_eq!(json["nawal"], "Kawoq");
    assert_eq!(json["dayNumber"], 39);
}
