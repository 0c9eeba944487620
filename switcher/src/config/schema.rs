//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locate::DEFAULT_MAX_SEARCH_RESULTS;
use crate::suffix::SuffixTable;

/// Suffix table used when no configuration sets one.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    ".h", ".hpp", ".hh", ".hxx", ".c", ".cpp", ".cc", ".cxx", ".m", ".mm",
];

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; the accessor
/// methods supply the defaults.
///
/// # Examples
///
/// ```
/// use switcher::config::Config;
///
/// let config = Config {
///     suffixes: Some(vec![".h".into(), ".cpp".into()]),
///     include_workspace_root: Some(false),
///     ..Default::default()
/// };
/// assert_eq!(config.suffix_table().unwrap().len(), 2);
/// assert!(!config.include_workspace_root());
/// assert_eq!(config.max_search_results(), 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ordered suffix table; order is both match preference and cycle order.
    pub suffixes: Option<Vec<String>>,

    /// Fall back to a workspace-wide search for the plain switch command.
    pub include_workspace_root: Option<bool>,

    /// Maximum number of workspace search results.
    pub max_search_results: Option<usize>,

    /// Glob excluded from workspace searches.
    pub search_exclude: Option<String>,

    /// Let `.gitignore`/`.ignore` files and hidden entries prune workspace
    /// searches.
    pub respect_ignore_files: Option<bool>,

    /// Program that opens the resolved companion.
    pub open_command: Option<String>,
}

impl Config {
    /// The configured suffix table, or [`DEFAULT_SUFFIXES`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured list is empty or has an unusable
    /// entry.
    pub fn suffix_table(&self) -> Result<SuffixTable> {
        match &self.suffixes {
            Some(suffixes) => SuffixTable::new(suffixes.iter().cloned()),
            None => SuffixTable::new(DEFAULT_SUFFIXES.iter().copied()),
        }
    }

    /// Workspace fallback toggle; only an explicit `false` turns it off.
    #[must_use]
    pub fn include_workspace_root(&self) -> bool {
        self.include_workspace_root.unwrap_or(true)
    }

    /// Search result cap.
    #[must_use]
    pub fn max_search_results(&self) -> usize {
        self.max_search_results.unwrap_or(DEFAULT_MAX_SEARCH_RESULTS)
    }

    /// Exclusion glob, empty when unset.
    #[must_use]
    pub fn search_exclude(&self) -> &str {
        self.search_exclude.as_deref().unwrap_or("")
    }

    /// Whether ignore files prune workspace searches; off unless set.
    #[must_use]
    pub fn respect_ignore_files(&self) -> bool {
        self.respect_ignore_files.unwrap_or(false)
    }
}
