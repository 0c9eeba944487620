//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::suffix::SuffixTable;
use ignore::overrides::OverrideBuilder;

/// Largest accepted `max_search_results`.
pub const MAX_SEARCH_RESULTS_LIMIT: usize = 1000;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use switcher::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { max_search_results: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref suffixes) = config.suffixes {
            Self::validate_suffixes(suffixes)?;
        }

        if let Some(max) = config.max_search_results {
            if max == 0 || max > MAX_SEARCH_RESULTS_LIMIT {
                return Err(Error::Validation {
                    field: "max_search_results".into(),
                    message: format!("Must be between 1 and {MAX_SEARCH_RESULTS_LIMIT}, got {max}"),
                });
            }
        }

        if let Some(ref exclude) = config.search_exclude {
            Self::validate_glob("search_exclude", exclude)?;
        }

        if let Some(ref command) = config.open_command {
            if command.trim().is_empty() {
                return Err(Error::Validation {
                    field: "open_command".into(),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a suffix list.
    ///
    /// The structural rules are those of [`SuffixTable::new`]; entries made
    /// only of whitespace are rejected as well.
    fn validate_suffixes(suffixes: &[String]) -> Result<()> {
        SuffixTable::new(suffixes.iter().cloned())?;

        if let Some(index) = suffixes.iter().position(|s| s.trim().is_empty()) {
            return Err(Error::InvalidSuffix {
                index,
                reason: "suffix is only whitespace".into(),
            });
        }

        Ok(())
    }

    /// An empty glob means "exclude nothing" and is accepted.
    fn validate_glob(field: &str, glob: &str) -> Result<()> {
        if glob.is_empty() {
            return Ok(());
        }

        let mut builder = OverrideBuilder::new("/");
        builder
            .add(glob)
            .and_then(|b| b.build())
            .map(|_| ())
            .map_err(|e| Error::Validation {
                field: field.into(),
                message: format!("Invalid glob '{glob}': {e}"),
            })
    }

    /// Entries that appear more than once, each reported once, in table
    /// order.
    ///
    /// Duplicates are legal: the cycle visits each position, so a repeated
    /// suffix is tried twice. Callers surface this as a warning.
    #[must_use]
    pub fn duplicate_suffixes(suffixes: &[String]) -> Vec<String> {
        let Ok(table) = SuffixTable::new(suffixes.iter().cloned()) else {
            return Vec::new();
        };

        let mut duplicates: Vec<String> = Vec::new();
        for (index, suffix) in table.iter().enumerate() {
            let first = table.index_of(suffix);
            if first != Some(index) && !duplicates.iter().any(|d| d == suffix) {
                duplicates.push(suffix.to_string());
            }
        }
        duplicates
    }
}
