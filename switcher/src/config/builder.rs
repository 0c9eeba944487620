//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Builds the effective configuration from every layer.
///
/// # Examples
///
/// ```
/// use switcher::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         suffixes: Some(vec![".h".into(), ".cpp".into()]),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.suffix_table().unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder that reads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory from which project configuration is discovered. Defaults
    /// to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user configuration.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `SWITCHER_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides, applied last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// Each file is validated on its own so errors name the offending file;
    /// the merged result is validated again.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                log::debug!("loaded configuration from {}", source.path.display());
                ConfigValidator::validate(&source.config)?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        if let Some(ref suffixes) = config.suffixes {
            for duplicate in ConfigValidator::duplicate_suffixes(suffixes) {
                log::warn!("suffix '{duplicate}' is listed more than once");
            }
        }

        Ok(config)
    }
}
