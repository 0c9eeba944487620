//! Environment variable handling for configuration overrides.
//!
//! `SWITCHER_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Comma-separated suffix table.
pub const ENV_SUFFIXES: &str = "SWITCHER_SUFFIXES";
/// Workspace fallback toggle.
pub const ENV_INCLUDE_WORKSPACE_ROOT: &str = "SWITCHER_INCLUDE_WORKSPACE_ROOT";
/// Search result cap.
pub const ENV_MAX_SEARCH_RESULTS: &str = "SWITCHER_MAX_SEARCH_RESULTS";
/// Search exclusion glob.
pub const ENV_SEARCH_EXCLUDE: &str = "SWITCHER_SEARCH_EXCLUDE";
/// Whether ignore files prune workspace searches.
pub const ENV_RESPECT_IGNORE_FILES: &str = "SWITCHER_RESPECT_IGNORE_FILES";
/// Open command.
pub const ENV_OPEN_COMMAND: &str = "SWITCHER_OPEN_COMMAND";

/// Every variable read by [`EnvironmentConfig::apply_overrides`].
pub const ENV_VARS: &[&str] = &[
    ENV_SUFFIXES,
    ENV_INCLUDE_WORKSPACE_ROOT,
    ENV_MAX_SEARCH_RESULTS,
    ENV_SEARCH_EXCLUDE,
    ENV_RESPECT_IGNORE_FILES,
    ENV_OPEN_COMMAND,
];

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use switcher::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (a
    /// non-numeric cap or an unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(suffixes) = env::var(ENV_SUFFIXES) {
            config.suffixes = Some(Self::parse_suffixes(&suffixes));
        }

        if let Ok(val) = env::var(ENV_INCLUDE_WORKSPACE_ROOT) {
            config.include_workspace_root = Some(Self::parse_bool(ENV_INCLUDE_WORKSPACE_ROOT, &val)?);
        }

        if let Ok(max) = env::var(ENV_MAX_SEARCH_RESULTS) {
            config.max_search_results =
                Some(max.trim().parse().map_err(|_| Error::Validation {
                    field: ENV_MAX_SEARCH_RESULTS.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(exclude) = env::var(ENV_SEARCH_EXCLUDE) {
            config.search_exclude = Some(exclude);
        }

        if let Ok(val) = env::var(ENV_RESPECT_IGNORE_FILES) {
            config.respect_ignore_files = Some(Self::parse_bool(ENV_RESPECT_IGNORE_FILES, &val)?);
        }

        if let Ok(command) = env::var(ENV_OPEN_COMMAND) {
            config.open_command = Some(command);
        }

        Ok(())
    }

    /// Parse a boolean from a string.
    ///
    /// Accepts true/false, 1/0, yes/no and on/off in any case.
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated suffix list, dropping blank items.
    ///
    /// Order is kept; it is the table order.
    pub(crate) fn parse_suffixes(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    }
}
