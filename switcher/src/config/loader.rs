//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "switcher.yaml";

/// Private, uncommitted project configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "switcher.local.yaml";

/// User configuration file name inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use switcher::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("/work/project/src"), None).unwrap();
/// for source in &sources {
///     println!("{} (precedence {})", source.path.display(), source.precedence);
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// 1. `{data_dir}/config.yaml`, default `~/.switcher/config.yaml`
    ///    (precedence 1)
    /// 2. `switcher.yaml` found walking up from `start_dir` (precedence 2)
    /// 3. `switcher.local.yaml` next to it (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(start_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config(data_dir)? {
            sources.push(user);
        }
        sources.extend(Self::discover_project_configs(start_dir)?);

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match default_data_dir() {
                Some(dir) => dir.join(USER_CONFIG_FILE),
                None => {
                    log::debug!("no home directory, skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.is_file() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Walk up from `start_dir` to the first directory holding a project
    /// configuration file and load the files found there.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();

        for dir in start_dir.ancestors() {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = dir.join(name);
                if path.is_file() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }
            if !configs.is_empty() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("invalid YAML: {e}"),
        })
    }

    /// Location of the project configuration file governing `start_dir`,
    /// if any.
    #[must_use]
    pub fn project_root(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join(LOCAL_CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }
}

/// The default data directory, `~/.switcher`.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".switcher"))
}
