//! Configuration system for switcher.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every layer
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SWITCHER_*`)
//! 3. Private project config (`switcher.local.yaml`)
//! 4. Project config (`switcher.yaml`)
//! 5. User config (`~/.switcher/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading for a file's directory:
//!
//! ```no_run
//! use switcher::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project/src"))
//!     .build()
//!     .unwrap();
//!
//! println!("suffixes: {}", config.suffix_table().unwrap());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_SUFFIXES};
pub use validator::ConfigValidator;
