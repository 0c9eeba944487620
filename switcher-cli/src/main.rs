//! Main entry point for the switcher CLI.
//!
//! Switches from a file to its companion (header and source, source and
//! test) by trying the configured suffixes in order:
//! - `switch`: companion next to the file, then optionally the workspace
//! - `switch-workspace`: companion next to the file, then the workspace
//! - `split`: show how a file name is classified
//! - `validate`: check configuration
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod host;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = switcher::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Error: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        workspace_root: cli.workspace_root,
        non_interactive: cli.non_interactive,
        open_with: cli.open_with,
    };

    let result = match cli.command {
        cli::Command::Switch(cmd) => cmd.execute(&global),
        cli::Command::SwitchWorkspace(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
