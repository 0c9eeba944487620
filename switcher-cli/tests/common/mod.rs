//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated workspace and data directory
//! - Command builders with the global flags pre-set
//! - File fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every environment variable the CLI reads.
const SWITCHER_ENV_VARS: &[&str] = &[
    "SWITCHER_DATA_DIR",
    "SWITCHER_WORKSPACE_ROOT",
    "SWITCHER_NON_INTERACTIVE",
    "SWITCHER_OPEN_WITH",
    "SWITCHER_ACTIVE_FILE",
    "SWITCHER_LOG_MODE",
    "SWITCHER_SUFFIXES",
    "SWITCHER_INCLUDE_WORKSPACE_ROOT",
    "SWITCHER_MAX_SEARCH_RESULTS",
    "SWITCHER_SEARCH_EXCLUDE",
    "SWITCHER_RESPECT_IGNORE_FILES",
    "SWITCHER_OPEN_COMMAND",
];

/// Test environment with an isolated workspace and data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Workspace root
    pub workspace: PathBuf,
    /// Data directory holding the user configuration
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty workspace and data
    /// directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let workspace = temp_dir.path().join("workspace");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&workspace).expect("Failed to create workspace");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            workspace,
            data_dir,
        }
    }

    /// Get a command builder with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("switcher").expect("Failed to find switcher binary");
        for var in SWITCHER_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.workspace);
        cmd
    }

    /// Get a command builder with the data directory and workspace root
    /// set, that never prompts.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--workspace-root")
            .arg(&self.workspace)
            .arg("--non-interactive");
        cmd
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.join(relative)
    }

    /// Create an empty file in the workspace.
    pub fn touch(&self, relative: &str) -> PathBuf {
        self.write(relative, "")
    }

    /// Create a file in the workspace.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write the user configuration.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run `switch` (or another switch-like subcommand) on `file` and
    /// return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn switch(&self, subcommand: &str, file: &Path) -> String {
        let output = self
            .command()
            .arg(subcommand)
            .arg(file)
            .output()
            .expect("Failed to run switch command");

        assert!(
            output.status.success(),
            "{subcommand} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// The path printed by a successful switch.
#[allow(dead_code)]
pub fn printed_path(stdout: &str) -> PathBuf {
    PathBuf::from(stdout.trim())
}
