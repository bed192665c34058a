//! Property-based tests for the conversion pair.
//!
//! Generates values, random tables and arbitrary symbol strings via proptest
//! and checks that decoding is the exact inverse of encoding.

use proptest::prelude::*;

use crate::convert::parse;
use crate::{arabic_to_roman, roman_to_arabic, NumeralTable, DEFAULT_TABLE};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn symbol_pool() -> Vec<char> {
    ('A'..='Z').chain('a'..='z').collect()
}

/// A valid table of 1..=13 distinct symbols paired with an in-range value.
fn arb_table_and_value() -> impl Strategy<Value = (NumeralTable, u64)> {
    (0usize..=6)
        .prop_flat_map(|orders| prop::sample::subsequence(symbol_pool(), 2 * orders + 1))
        .prop_flat_map(|symbols| {
            let table = NumeralTable::new(symbols).unwrap();
            let max = table.max_value();
            (Just(table), 0..=max)
        })
}

/// Arbitrary strings over the default symbols, valid or not.
fn arb_default_symbols() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(DEFAULT_TABLE.symbols().to_vec()), 0..12)
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn default_table_round_trip(value in 0u64..=3999) {
        let roman = arabic_to_roman(value, None).unwrap();
        prop_assert_eq!(roman.is_empty(), value == 0);
        prop_assert!(roman.chars().all(|c| DEFAULT_TABLE.contains(c)));
        prop_assert_eq!(roman_to_arabic(&roman, None).unwrap(), value);
    }

    #[test]
    fn custom_table_round_trip((table, value) in arb_table_and_value()) {
        let roman = arabic_to_roman(value, Some(&table)).unwrap();
        prop_assert!(roman.chars().all(|c| table.contains(c)));
        prop_assert_eq!(roman_to_arabic(&roman, Some(&table)).unwrap(), value);
    }

    #[test]
    fn out_of_range_rejected(value in 4000u64..) {
        prop_assert!(arabic_to_roman(value, None).is_err());
    }

    #[test]
    fn accepted_strings_are_canonical(symbols in arb_default_symbols()) {
        if let Ok(value) = parse(&symbols, &DEFAULT_TABLE, false) {
            let expected: String = symbols.iter().collect();
            prop_assert_eq!(arabic_to_roman(value, None).unwrap(), expected);
        }
    }
}
