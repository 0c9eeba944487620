//! Library exports for switcher-cli.
//!
//! This module exports the CLI structure so that documentation tooling can
//! render it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod host;
pub mod utils;

pub use cli::Cli;
