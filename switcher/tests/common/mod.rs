//! Common test utilities for integration tests.
//!
//! This module provides a temporary workspace fixture and host
//! collaborators that record what the library asked of them.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use switcher::host::{Document, DocumentPresenter, SelectionPrompt};
use tempfile::TempDir;

/// A temporary directory tree that is removed on drop.
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temporary workspace"),
        }
    }

    /// Creates an empty workspace holding `files` (relative paths).
    pub fn with_files(files: &[&str]) -> Self {
        let workspace = Self::new();
        for file in files {
            workspace.touch(file);
        }
        workspace
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Creates an empty file, and its parent directories.
    pub fn touch(&self, relative: &str) -> PathBuf {
        self.write(relative, "")
    }

    /// Creates a file with `contents`, and its parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// Presenter that remembers every document it was handed.
#[derive(Default)]
pub struct RecordingPresenter {
    presented: RefCell<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl RecordingPresenter {
    /// Paths presented so far, in order.
    pub fn presented(&self) -> Vec<PathBuf> {
        self.presented.borrow().clone()
    }
}

impl DocumentPresenter for RecordingPresenter {
    fn present(&self, document: &Document) -> switcher::Result<()> {
        self.presented.borrow_mut().push(document.path().to_path_buf());
        Ok(())
    }
}

/// Prompt that picks a fixed position, or dismisses when given `None`,
/// and remembers the lists it was shown.
pub struct ScriptedPrompt {
    pick: Option<usize>,
    shown: RefCell<Vec<Vec<String>>>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    /// Always picks the entry at `index`.
    pub fn picking(index: usize) -> Self {
        Self {
            pick: Some(index),
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Always dismisses.
    pub fn dismissing() -> Self {
        Self {
            pick: None,
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Every list shown so far.
    pub fn shown(&self) -> Vec<Vec<String>> {
        self.shown.borrow().clone()
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn choose(&self, items: &[String]) -> Option<String> {
        self.shown.borrow_mut().push(items.to_vec());
        self.pick.and_then(|i| items.get(i).cloned())
    }
}
