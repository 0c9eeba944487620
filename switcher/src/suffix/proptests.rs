//! Property-based tests for the suffix table cycle.

use super::SuffixTable;
use proptest::prelude::*;
use std::collections::HashSet;

fn suffix_strategy() -> impl Strategy<Value = String> {
    "\\.[a-z]{1,4}"
}

fn table_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(suffix_strategy(), 1..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // next() always stays in bounds
    #[test]
    fn next_stays_in_bounds(entries in table_strategy(), index in 0usize..10) {
        let table = SuffixTable::new(entries).unwrap();
        let index = index % table.len();
        prop_assert!(table.next(index) < table.len());
    }

    // The cycle visits next(s), next(next(s)), ... and stops before s
    #[test]
    fn cycle_follows_next(entries in table_strategy(), start in 0usize..10) {
        let table = SuffixTable::new(entries).unwrap();
        let start = start % table.len();

        let mut expected = Vec::new();
        let mut index = table.next(start);
        while index != start {
            expected.push(index);
            index = table.next(index);
        }

        let order: Vec<usize> = table.cycle_from(start).collect();
        prop_assert_eq!(order, expected);
    }

    // At most |T| - 1 candidates, none revisited, start never visited
    #[test]
    fn cycle_visits_each_other_position_once(entries in table_strategy(), start in 0usize..10) {
        let table = SuffixTable::new(entries).unwrap();
        let start = start % table.len();

        let order: Vec<usize> = table.cycle_from(start).collect();
        prop_assert_eq!(order.len(), table.len() - 1);

        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert!(!unique.contains(&start));
    }

    // A file named after entry i is detected at the first position whose
    // entry is a trailing match, which is never after i
    #[test]
    fn detect_never_after_own_entry(entries in table_strategy(), pick in 0usize..10, stem in "[a-z]{1,8}") {
        let table = SuffixTable::new(entries).unwrap();
        let pick = pick % table.len();
        let name = format!("{stem}{}", table.at(pick).unwrap());

        let detected = table.detect(&name);
        prop_assert!(detected.is_some());
        prop_assert!(detected.unwrap() <= pick);
    }

    // Upper-casing the file name does not change classification
    #[test]
    fn detect_ignores_ascii_case(entries in table_strategy(), stem in "[a-z]{1,8}", pick in 0usize..10) {
        let table = SuffixTable::new(entries).unwrap();
        let pick = pick % table.len();
        let name = format!("{stem}{}", table.at(pick).unwrap());

        prop_assert_eq!(table.detect(&name), table.detect(&name.to_ascii_uppercase()));
    }
}
