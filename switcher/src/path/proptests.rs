//! Property-based tests for path splitting.

use super::normalize::to_forward_slashes;
use super::split::SplitPath;
use crate::suffix::SuffixTable;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn directory_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component_strategy(), 0..6)
}

fn table() -> SuffixTable {
    SuffixTable::new([".h", ".hpp", ".c", ".cpp", ".test.cpp"]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // directory + "/" + base + suffix reconstructs the normalized input
    #[test]
    fn split_round_trips(
        dirs in directory_strategy(),
        stem in component_strategy(),
        pick in 0usize..5,
        backslashes in any::<bool>(),
    ) {
        let table = table();
        let separator = if backslashes { "\\" } else { "/" };
        let path = format!(
            "{separator}{}{separator}{stem}{}",
            dirs.join(separator),
            table.at(pick).unwrap()
        );

        let split = SplitPath::split(&path, &table);
        prop_assert!(split.suffix().is_some());
        prop_assert_eq!(split.rejoin(), to_forward_slashes(&path));
    }

    // The detected index always points at an entry matching the suffix text
    #[test]
    fn split_index_agrees_with_suffix(stem in component_strategy(), pick in 0usize..5) {
        let table = table();
        let path = format!("/src/{stem}{}", table.at(pick).unwrap().to_ascii_uppercase());

        let split = SplitPath::split(&path, &table);
        let index = split.suffix_index().unwrap();
        let entry = table.at(index).unwrap();
        prop_assert!(entry.eq_ignore_ascii_case(split.suffix().unwrap()));
    }

    // Names that end in none of the entries are left whole
    #[test]
    fn unknown_names_are_not_split(stem in component_strategy()) {
        let table = table();
        let path = format!("/src/{stem}.rs");

        let split = SplitPath::split(&path, &table);
        prop_assert_eq!(split.suffix(), None);
        prop_assert_eq!(split.base(), format!("{stem}.rs"));
    }
}
