//! Collaborators supplied by the host (editor, CLI, tests).
//!
//! Resolution only talks to the outside world through these traits, so it
//! can be driven by a real filesystem ([`fs`]), a terminal, or test doubles.
//! Every call is blocking and resolution issues them strictly one at a time.

pub mod fs;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use fs::{FsOpener, FsWorkspaceSearch};

/// Handle to a document that was opened successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    /// Wraps the path of an opened document.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the handle, returning its path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Yields the file the user is currently looking at, if any.
pub trait ActiveDocument {
    /// Absolute path of the focused file, or `None` when nothing is focused.
    fn active_path(&self) -> Option<PathBuf>;
}

impl ActiveDocument for Option<PathBuf> {
    fn active_path(&self) -> Option<PathBuf> {
        self.clone()
    }
}

impl ActiveDocument for Path {
    fn active_path(&self) -> Option<PathBuf> {
        Some(self.to_path_buf())
    }
}

/// Opens documents by path.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentOpener {
    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file is absent or unreadable.
    fn open(&self, path: &Path) -> Result<Document>;
}

/// Searches the workspace for files by glob.
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceSearch {
    /// Find at most `max_results` files matching `pattern` and not matching
    /// `exclude` (empty means nothing is excluded).
    ///
    /// # Errors
    ///
    /// Fails when a pattern is malformed or the workspace cannot be read.
    fn find_files(&self, pattern: &str, exclude: &str, max_results: usize)
        -> Result<Vec<PathBuf>>;
}

/// Lets the user pick one entry out of several.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionPrompt {
    /// Show `items` in the given order; `None` means the user dismissed the
    /// prompt.
    fn choose(&self, items: &[String]) -> Option<String>;
}

/// Shows an opened document to the user.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentPresenter {
    /// Bring `document` to the front.
    ///
    /// # Errors
    ///
    /// Fails when the document cannot be displayed.
    fn present(&self, document: &Document) -> Result<()>;
}

/// A prompt that is always dismissed, for non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissPrompt;

impl SelectionPrompt for DismissPrompt {
    fn choose(&self, items: &[String]) -> Option<String> {
        log::debug!("dismissing selection among {} entries", items.len());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new("/src/foo.cpp");
        assert_eq!(doc.path(), Path::new("/src/foo.cpp"));
        assert_eq!(doc.to_string(), Path::new("/src/foo.cpp").display().to_string());
        assert_eq!(doc.into_path_buf(), PathBuf::from("/src/foo.cpp"));
    }

    #[test]
    fn test_active_document_option() {
        let none: Option<PathBuf> = None;
        assert_eq!(none.active_path(), None);

        let some = Some(PathBuf::from("/src/foo.h"));
        assert_eq!(some.active_path(), Some(PathBuf::from("/src/foo.h")));
        assert_eq!(
            Path::new("/src/foo.h").active_path(),
            Some(PathBuf::from("/src/foo.h"))
        );
    }

    #[test]
    fn test_dismiss_prompt() {
        let items = vec!["/a/foo.cpp".to_string(), "/b/foo.cpp".to_string()];
        assert_eq!(DismissPrompt.choose(&items), None);
    }
}
