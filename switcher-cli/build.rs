//! Build script for switcher-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let file = || {
        Arg::new("file")
            .value_name("FILE")
            .help("File to switch from")
            .env("SWITCHER_ACTIVE_FILE")
    };

    Command::new("switcher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Switch between companion files by suffix")
        .long_about(
            "Switch from a file to its companion (header and source, source and test) \
             by trying the configured suffixes in order, next to the file first and \
             then across the workspace",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SWITCHER_DATA_DIR"),
        )
        .arg(
            Arg::new("workspace-root")
                .long("workspace-root")
                .help("Workspace searched for companions (default: current directory)")
                .value_name("PATH")
                .global(true)
                .env("SWITCHER_WORKSPACE_ROOT"),
        )
        .arg(
            Arg::new("non-interactive")
                .long("non-interactive")
                .help("Never prompt; dismiss selections among several matches")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("SWITCHER_NON_INTERACTIVE"),
        )
        .arg(
            Arg::new("open-with")
                .long("open-with")
                .help("Open the companion with this command instead of printing its path")
                .value_name("COMMAND")
                .global(true)
                .env("SWITCHER_OPEN_WITH"),
        )
        .subcommands(vec![
            Command::new("switch")
                .about("Switch to the companion of a file")
                .long_about(
                    "Try the other configured suffixes next to FILE, falling back to a \
                     workspace search when include_workspace_root is enabled",
                )
                .arg(file()),
            Command::new("switch-workspace")
                .about("Switch to the companion of a file, searching the whole workspace")
                .long_about(
                    "Like switch, but always fall back to a workspace search regardless \
                     of include_workspace_root",
                )
                .arg(file()),
            Command::new("split")
                .about("Show how a file name is split into base and suffix")
                .long_about("Show the directory, base name, suffix and the companions tried in order"),
            Command::new("validate")
                .about("Validate a configuration file or the effective configuration")
                .long_about("Check a switcher configuration file for errors and duplicate suffixes"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("switcher.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
