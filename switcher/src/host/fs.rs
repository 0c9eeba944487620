//! Filesystem-backed host collaborators.
//!
//! The workspace search walks the whole tree with the `ignore` crate and
//! matches names with gitignore-style globs. Hidden entries and ignore
//! files prune the walk only when asked to. Walk order is sorted by file
//! name, which keeps results stable between runs.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;

use super::{Document, DocumentOpener, WorkspaceSearch};
use crate::error::{Error, Result};

/// Opens regular, readable files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl DocumentOpener for FsOpener {
    fn open(&self, path: &Path) -> Result<Document> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "not a regular file".to_string(),
            });
        }
        // Only readability is checked; the contents are never looked at.
        File::open(path)?;
        Ok(Document::new(path))
    }
}

/// Glob search over the files below a workspace root.
///
/// # Examples
///
/// ```no_run
/// use switcher::host::{FsWorkspaceSearch, WorkspaceSearch};
///
/// let search = FsWorkspaceSearch::new("/work/project");
/// let found = search.find_files("**/widget.cpp", "", 8).unwrap();
/// for path in found {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FsWorkspaceSearch {
    root: PathBuf,
    respect_ignore_files: bool,
}

impl FsWorkspaceSearch {
    /// Search every file below `root`, ignored and hidden ones included.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_ignore_files: false,
        }
    }

    /// Whether hidden entries and `.gitignore`, `.ignore` and git exclude
    /// files prune the walk.
    #[must_use]
    pub fn respect_ignore_files(mut self, yes: bool) -> Self {
        self.respect_ignore_files = yes;
        self
    }

    /// The workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn glob(&self, pattern: &str) -> Result<Override> {
        let search_error = |e: ignore::Error| Error::Search {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        };

        let mut builder = OverrideBuilder::new(&self.root);
        builder.add(pattern).map_err(search_error)?;
        builder.build().map_err(search_error)
    }
}

impl WorkspaceSearch for FsWorkspaceSearch {
    fn find_files(
        &self,
        pattern: &str,
        exclude: &str,
        max_results: usize,
    ) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::Search {
                pattern: pattern.to_string(),
                reason: format!("workspace root {} is not a directory", self.root.display()),
            });
        }
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let include = self.glob(pattern)?;
        let exclude = if exclude.is_empty() {
            None
        } else {
            Some(self.glob(exclude)?)
        };

        let walker = WalkBuilder::new(&self.root)
            .hidden(self.respect_ignore_files)
            .ignore(self.respect_ignore_files)
            .git_ignore(self.respect_ignore_files)
            .git_global(self.respect_ignore_files)
            .git_exclude(self.respect_ignore_files)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut found = Vec::new();
        for entry in walker {
            // Unreadable entries are skipped, not fatal.
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            if !include.matched(path, false).is_whitelist() {
                continue;
            }
            if exclude
                .as_ref()
                .is_some_and(|glob| glob.matched(path, false).is_whitelist())
            {
                continue;
            }

            found.push(path.to_path_buf());
            if found.len() >= max_results {
                break;
            }
        }

        log::debug!(
            "search '{pattern}' below {} found {} file(s)",
            self.root.display(),
            found.len()
        );
        Ok(found)
    }
}
