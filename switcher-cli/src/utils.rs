//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution and configuration loading.

use crate::error::CliError;
use std::env;
use std::path::{Path, PathBuf};
use switcher::config::ConfigBuilder;
use switcher::path::normalize;
use switcher::Config;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Root of the workspace searched for companions.
    pub workspace_root: Option<PathBuf>,

    /// Never prompt; dismiss every selection.
    pub non_interactive: bool,

    /// Program that opens the companion instead of printing it.
    pub open_with: Option<String>,
}

/// Normalize a path (make absolute, expand ~, fold `.` and `..`) without
/// following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize::normalize(path).map_err(CliError::from)
}

/// Resolve a path, using CWD if not specified.
pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let path_to_resolve = match path {
        Some(p) => p,
        None => env::current_dir()?,
    };
    normalize_path(&path_to_resolve)
}

/// The workspace root: `--workspace-root` or the current directory.
pub fn resolve_workspace_root(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let root = resolve_path(global.workspace_root.clone())?;
    if !root.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "Workspace root is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// Load hierarchical configuration.
///
/// Project configuration is discovered from `start_dir` upward; the user
/// configuration comes from `--data-dir` or `~/.switcher`.
pub fn load_configuration(global: &GlobalOptions, start_dir: &Path) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(start_dir);
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Directory from which configuration is discovered for `file`.
pub fn config_start_dir(file: Option<&Path>) -> Result<PathBuf, CliError> {
    match file.and_then(Path::parent) {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        _ => Ok(env::current_dir()?),
    }
}

/// The open command in effect: `--open-with`, else the configured one.
pub fn open_command(global: &GlobalOptions, config: &Config) -> Option<String> {
    global
        .open_with
        .clone()
        .or_else(|| config.open_command.clone())
        .filter(|command| !command.trim().is_empty())
}
