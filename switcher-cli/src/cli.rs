//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, SplitCommand, SwitchCommand, SwitchWorkspaceCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for switching between companion files.
#[derive(Parser)]
#[command(name = "switcher")]
#[command(version, about = "Switch between companion files by suffix", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SWITCHER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Workspace searched for companions (default: current directory)
    #[arg(long, value_name = "PATH", global = true, env = "SWITCHER_WORKSPACE_ROOT")]
    pub workspace_root: Option<PathBuf>,

    /// Never prompt; dismiss selections among several matches
    #[arg(long, global = true, env = "SWITCHER_NON_INTERACTIVE")]
    pub non_interactive: bool,

    /// Open the companion with this command instead of printing its path
    #[arg(long, value_name = "COMMAND", global = true, env = "SWITCHER_OPEN_WITH")]
    pub open_with: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Switch to the companion of a file
    Switch(SwitchCommand),

    /// Switch to the companion of a file, searching the whole workspace
    SwitchWorkspace(SwitchWorkspaceCommand),

    /// Show how a file name is split into base and suffix
    Split(SplitCommand),

    /// Validate a configuration file or the effective configuration
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
