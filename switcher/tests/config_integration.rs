//! Integration tests for the layered configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so concurrent access would
//! race. Only environment-dependent tests run serially.

mod common;

use common::Workspace;
use serial_test::serial;
use std::env;
use switcher::config::environment::ENV_VARS;
use switcher::config::{Config, ConfigBuilder, ConfigLoader};
use switcher::error::Error;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `SWITCHER_*` configuration variable for one test.
fn clear_switcher_env_vars() -> Vec<EnvGuard> {
    ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}

#[test]
#[serial]
fn test_complete_precedence_chain() {
    let _clean = clear_switcher_env_vars();
    let workspace = Workspace::new();
    workspace.write(
        "data/config.yaml",
        "suffixes: ['.h', '.c']\nopen_command: nano\nmax_search_results: 20\n",
    );
    workspace.write(
        "project/switcher.yaml",
        "suffixes: ['.hpp', '.cpp']\nsearch_exclude: 'build/**'\nmax_search_results: 10\n",
    );
    workspace.write("project/switcher.local.yaml", "max_search_results: 5\n");
    let src = workspace.path("project/src");
    std::fs::create_dir_all(&src).unwrap();

    let _max = EnvGuard::new("SWITCHER_MAX_SEARCH_RESULTS", "3");

    let config = ConfigBuilder::new()
        .with_working_dir(&src)
        .with_data_dir(&workspace.path("data"))
        .with_config(Config {
            include_workspace_root: Some(false),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.suffixes, Some(vec![".hpp".into(), ".cpp".into()]));
    assert_eq!(config.search_exclude(), "build/**");
    assert_eq!(config.open_command.as_deref(), Some("nano"));
    assert_eq!(config.max_search_results(), 3);
    assert!(!config.include_workspace_root());
}

#[test]
#[serial]
fn test_env_suffixes_replace_file_suffixes() {
    let _clean = clear_switcher_env_vars();
    let workspace = Workspace::new();
    workspace.write("switcher.yaml", "suffixes: ['.h', '.cpp']\n");

    let _suffixes = EnvGuard::new("SWITCHER_SUFFIXES", ".hh, .cc");
    let config = ConfigBuilder::new()
        .with_working_dir(workspace.root())
        .with_data_dir(workspace.root())
        .build()
        .unwrap();

    let table = config.suffix_table().unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec![".hh", ".cc"]);
}

#[test]
#[serial]
fn test_env_boolean_toggle() {
    let _clean = clear_switcher_env_vars();
    for (value, expected) in [("off", false), ("YES", true), ("0", false)] {
        let _toggle = EnvGuard::new("SWITCHER_INCLUDE_WORKSPACE_ROOT", value);
        let config = ConfigBuilder::new().skip_files().build().unwrap();
        assert_eq!(config.include_workspace_root(), expected, "{value}");
    }
}

#[test]
#[serial]
fn test_env_respect_ignore_files_toggle() {
    let _clean = clear_switcher_env_vars();
    let workspace = Workspace::new();
    workspace.write("switcher.yaml", "respect_ignore_files: false\n");

    let config = ConfigBuilder::new()
        .with_working_dir(workspace.root())
        .with_data_dir(workspace.root())
        .build()
        .unwrap();
    assert!(!config.respect_ignore_files());

    let _respect = EnvGuard::new("SWITCHER_RESPECT_IGNORE_FILES", "on");
    let config = ConfigBuilder::new()
        .with_working_dir(workspace.root())
        .with_data_dir(workspace.root())
        .build()
        .unwrap();
    assert!(config.respect_ignore_files());
}

#[test]
#[serial]
fn test_env_invalid_values_rejected() {
    let _clean = clear_switcher_env_vars();

    {
        let _toggle = EnvGuard::new("SWITCHER_INCLUDE_WORKSPACE_ROOT", "sometimes");
        let err = ConfigBuilder::new().skip_files().build().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    {
        let _max = EnvGuard::new("SWITCHER_MAX_SEARCH_RESULTS", "many");
        assert!(ConfigBuilder::new().skip_files().build().is_err());
    }

    {
        let _suffixes = EnvGuard::new("SWITCHER_SUFFIXES", " , ");
        let err = ConfigBuilder::new().skip_files().build().unwrap_err();
        assert!(matches!(err, Error::EmptySuffixTable));
    }
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _clean = clear_switcher_env_vars();
    let _max = EnvGuard::new("SWITCHER_MAX_SEARCH_RESULTS", "2");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_project_file_names_file() {
    let workspace = Workspace::new();
    let file = workspace.write("switcher.yaml", "suffixes: [.h\n");

    let err = ConfigBuilder::new()
        .with_working_dir(workspace.root())
        .with_data_dir(workspace.root())
        .skip_env()
        .build()
        .unwrap_err();
    match err {
        Error::Validation { field, .. } => assert_eq!(field, file.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_key_rejected() {
    let workspace = Workspace::new();
    let file = workspace.write("switcher.yaml", "suffix_order: ['.h']\n");
    assert!(ConfigLoader::load_file(&file).is_err());
}

#[test]
fn test_project_root_discovery() {
    let workspace = Workspace::new();
    workspace.write("repo/switcher.local.yaml", "max_search_results: 2\n");
    let deep = workspace.path("repo/a/b/c");
    std::fs::create_dir_all(&deep).unwrap();

    assert_eq!(ConfigLoader::project_root(&deep), Some(workspace.path("repo")));

    let sources = ConfigLoader::discover_project_configs(&deep).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].precedence, 3);
}
