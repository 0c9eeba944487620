//! Command to validate switcher configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use std::env;
use std::path::PathBuf;
use switcher::config::{ConfigLoader, ConfigValidator};

/// Validate a configuration file, or the effective configuration for the
/// current directory.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = match self.config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                let config = ConfigLoader::load_file(&path)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                ConfigValidator::validate(&config)
                    .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
                config
            }
            None => load_configuration(global, &env::current_dir()?)?,
        };

        if let Some(ref suffixes) = config.suffixes {
            for duplicate in ConfigValidator::duplicate_suffixes(suffixes) {
                eprintln!("Warning: suffix '{duplicate}' is listed more than once");
            }
        }

        if !global.quiet {
            let table = config.suffix_table()?;
            println!("Configuration is valid");
            println!("suffixes: {table}");
        }
        Ok(())
    }
}
