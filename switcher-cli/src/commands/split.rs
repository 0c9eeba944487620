//! Command to show how a file name is classified.

use crate::error::CliError;
use crate::utils::{config_start_dir, load_configuration, normalize_path, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use switcher::{SplitPath, SuffixTable};

/// Show the directory, base name and suffix of a file, and the companions
/// tried from it in order.
#[derive(Args)]
pub struct SplitCommand {
    /// File to classify (need not exist)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for the split command.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Human,
    /// JSON format
    Json,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = normalize_path(&self.file)?;
        let config = load_configuration(global, &config_start_dir(Some(&path))?)?;
        let table = config.suffix_table()?;
        let split = SplitPath::from_path(&path, &table);

        match self.format {
            OutputFormat::Human => format_as_human(&split, &table),
            OutputFormat::Json => format_as_json(&split, &table),
        }
    }
}

/// Companions tried from `split`, as (suffix, path) pairs in cycle order.
fn cycle(split: &SplitPath, table: &SuffixTable) -> Vec<(String, String)> {
    split
        .suffix_index()
        .map(|start| {
            table
                .cycle_from(start)
                .filter_map(|i| table.at(i))
                .map(|suffix| (suffix.to_string(), split.candidate(suffix)))
                .collect()
        })
        .unwrap_or_default()
}

fn format_as_human(split: &SplitPath, table: &SuffixTable) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "directory: {}", split.directory())?;
    writeln!(handle, "base:      {}", split.base())?;
    match (split.suffix(), split.suffix_index()) {
        (Some(suffix), Some(index)) => writeln!(handle, "suffix:    {suffix} (#{index})")?,
        _ => writeln!(handle, "suffix:    - (not in {table})")?,
    }

    for (i, (suffix, candidate)) in cycle(split, table).iter().enumerate() {
        writeln!(handle, "{:>3}. {suffix:<8} {candidate}", i + 1)?;
    }

    Ok(())
}

fn format_as_json(split: &SplitPath, table: &SuffixTable) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let candidates: Vec<serde_json::Value> = cycle(split, table)
        .into_iter()
        .map(|(suffix, path)| serde_json::json!({ "suffix": suffix, "path": path }))
        .collect();
    let report = serde_json::json!({
        "split": split,
        "candidates": candidates,
    });

    serde_json::to_writer_pretty(&mut handle, &report)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}
