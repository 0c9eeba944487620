//! Commands that switch from a file to its companion.
//!
//! `switch` searches the workspace only when `include_workspace_root` is
//! on; `switch-workspace` always does.

use crate::error::CliError;
use crate::host::{CommandPresenter, StdoutPresenter, TerminalPrompt};
use crate::utils::{
    config_start_dir, load_configuration, normalize_path, open_command, resolve_workspace_root,
    GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;
use switcher::host::{DismissPrompt, DocumentPresenter, FsOpener, FsWorkspaceSearch, SelectionPrompt};
use switcher::operations::{EntryPoint, SwitchHost, SwitchOptions, SwitchOutcome, Switcher};

/// Switch to the companion of a file.
#[derive(Args)]
pub struct SwitchCommand {
    /// File to switch from
    #[arg(value_name = "FILE", env = "SWITCHER_ACTIVE_FILE")]
    pub file: Option<PathBuf>,
}

impl SwitchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        run_switch(self.file, EntryPoint::Switch, global)
    }
}

/// Switch to the companion of a file, searching the whole workspace if
/// it is not next to the file.
#[derive(Args)]
pub struct SwitchWorkspaceCommand {
    /// File to switch from
    #[arg(value_name = "FILE", env = "SWITCHER_ACTIVE_FILE")]
    pub file: Option<PathBuf>,
}

impl SwitchWorkspaceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        run_switch(self.file, EntryPoint::SwitchWorkspace, global)
    }
}

fn run_switch(
    file: Option<PathBuf>,
    entry: EntryPoint,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    let active = file.as_deref().map(normalize_path).transpose()?;

    let config = load_configuration(global, &config_start_dir(active.as_deref())?)?;
    let table = config.suffix_table()?;
    let search = FsWorkspaceSearch::new(resolve_workspace_root(global)?)
        .respect_ignore_files(config.respect_ignore_files());

    let prompt: &dyn SelectionPrompt = if global.non_interactive {
        &DismissPrompt
    } else {
        &TerminalPrompt
    };
    let presenter: Box<dyn DocumentPresenter> =
        match open_command(global, &config).and_then(|cmd| CommandPresenter::parse(&cmd)) {
            Some(command) => Box::new(command),
            None => Box::new(StdoutPresenter),
        };

    let host = SwitchHost {
        opener: &FsOpener,
        search: &search,
        prompt,
        presenter: presenter.as_ref(),
    };

    match Switcher::new(&table, SwitchOptions::from(&config), host).run(&active, entry) {
        SwitchOutcome::Switched { .. } => Ok(()),
        SwitchOutcome::NoActiveDocument => Err(CliError::NoCompanion(
            "No active file (pass FILE or set SWITCHER_ACTIVE_FILE)".to_string(),
        )),
        SwitchOutcome::UnknownSuffix { path } => Err(CliError::NoCompanion(format!(
            "{} does not end in a configured suffix {table}",
            path.display()
        ))),
        SwitchOutcome::Exhausted { path, tried } => Err(CliError::NoCompanion(format!(
            "No companion file found for {} ({tried} candidate(s) tried)",
            path.display()
        ))),
    }
}
