//! Property tests for the per-column transformations.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use deid_model::CellValue;
use deid_transform::{
    CategoryMap, hash_identifier, shift_date, shift_float, shift_integer, shift_semester,
};

proptest! {
    #[test]
    fn hash_is_always_twelve_ascii_digits(value in ".*") {
        let hashed = hash_identifier(&value);
        prop_assert_eq!(hashed.len(), 12);
        prop_assert!(hashed.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn hash_is_deterministic(value in ".*") {
        prop_assert_eq!(hash_identifier(&value), hash_identifier(&value));
    }

    #[test]
    fn integer_jitter_moves_at_most_one(
        value in -1_000_000_000i64..=1_000_000_000,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shifted = shift_integer(value, &mut rng);
        prop_assert!((shifted - value).abs() <= 1);
    }

    #[test]
    fn float_jitter_moves_at_most_a_quarter(
        value in -1_000_000.0f64..=1_000_000.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shifted = shift_float(value, &mut rng);
        prop_assert!((shifted - value).abs() <= 0.25 + 1e-6);
    }

    #[test]
    fn semester_shift_recomposes_year_and_suffix(
        year in 1000i32..=9998,
        suffix in "[0-9A-Z]{2}",
        years in -100i32..=100,
    ) {
        let code = format!("{year}{suffix}");
        let expected = format!("{}{}", year + years, suffix);
        prop_assert_eq!(shift_semester(&code, years), Some(expected));
    }

    #[test]
    fn semester_shift_rejects_wrong_lengths(value in ".*", years in -10i32..=10) {
        prop_assume!(value.chars().count() != 6);
        prop_assert_eq!(shift_semester(&value, years), None);
    }

    #[test]
    fn date_shift_preserves_month_and_day(
        year in 1970i32..=2030,
        month in 1u32..=12,
        day in 1u32..=28,
        years in -50i32..=50,
    ) {
        let date = format!("{year:04}-{month:02}-{day:02}");
        let expected = format!("{:04}-{month:02}-{day:02}", year - years);
        prop_assert_eq!(shift_date(&date, years), Some(expected));
    }

    #[test]
    fn category_labels_are_a_bijection_over_values(
        values in prop::collection::vec(prop::option::of("[a-c]{0,2}"), 0..30),
    ) {
        let cells: Vec<CellValue> = values
            .iter()
            .map(|value| match value {
                Some(text) => CellValue::Text(text.clone()),
                None => CellValue::Missing,
            })
            .collect();
        let mut map = CategoryMap::new();
        let labels: Vec<String> = cells.iter().map(|cell| map.label_for(cell)).collect();
        for (i, left) in cells.iter().enumerate() {
            for (j, right) in cells.iter().enumerate() {
                prop_assert_eq!(
                    labels[i] == labels[j],
                    left.as_text() == right.as_text(),
                    "cells {} and {} disagree with their labels",
                    i,
                    j
                );
            }
        }
    }
}
