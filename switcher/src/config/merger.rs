//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use switcher::config::{Config, ConfigMerger};
///
/// let low = Config { max_search_results: Some(4), ..Default::default() };
/// let high = Config { max_search_results: Some(2), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_search_results, Some(2));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources are expected from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::trace!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced when set in `source`. The suffix list is
    /// replaced wholesale, never concatenated, since its order is the cycle
    /// order.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.suffixes.is_some() {
            target.suffixes.clone_from(&source.suffixes);
        }

        if source.include_workspace_root.is_some() {
            target.include_workspace_root = source.include_workspace_root;
        }

        if source.max_search_results.is_some() {
            target.max_search_results = source.max_search_results;
        }

        if source.search_exclude.is_some() {
            target.search_exclude.clone_from(&source.search_exclude);
        }

        if source.respect_ignore_files.is_some() {
            target.respect_ignore_files = source.respect_ignore_files;
        }

        if source.open_command.is_some() {
            target.open_command.clone_from(&source.open_command);
        }
    }
}
