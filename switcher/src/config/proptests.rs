//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn suffix_strategy() -> impl Strategy<Value = String> {
    "[._-]?[a-zA-Z0-9]{1,6}"
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec(suffix_strategy(), 1..8)),
        prop::option::of(any::<bool>()),
        prop::option::of(1usize..=1000),
        prop::option::of("[a-z]{1,8}/\\*\\*"),
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(suffixes, include, max, exclude, respect, open)| Config {
            suffixes,
            include_workspace_root: include,
            max_search_results: max,
            search_exclude: exclude,
            respect_ignore_files: respect,
            open_command: open,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher layer always win; unset fields fall through.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.suffixes.clone(), high.suffixes.clone().or(low.suffixes.clone()));
        prop_assert_eq!(merged.include_workspace_root, high.include_workspace_root.or(low.include_workspace_root));
        prop_assert_eq!(merged.max_search_results, high.max_search_results.or(low.max_search_results));
        prop_assert_eq!(merged.search_exclude.clone(), high.search_exclude.clone().or(low.search_exclude.clone()));
        prop_assert_eq!(merged.respect_ignore_files, high.respect_ignore_files.or(low.respect_ignore_files));
        prop_assert_eq!(merged.open_command.clone(), high.open_command.clone().or(low.open_command.clone()));
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging an empty layer changes nothing.
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Every generated config is valid, and so is any merge of two.
    #[test]
    fn merge_of_valid_configs_is_valid(low in config_strategy(), high in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&low).is_ok());
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // A valid config's suffix table has exactly the configured entries.
    #[test]
    fn suffix_table_matches_list(config in config_strategy()) {
        let table = config.suffix_table().unwrap();
        if let Some(ref suffixes) = config.suffixes {
            let entries: Vec<&str> = table.iter().collect();
            prop_assert_eq!(entries, suffixes.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
