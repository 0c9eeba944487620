//! Resolving one companion candidate to an opened document.
//!
//! A candidate is tried in the directory of the current file first. Only
//! when that fails, and the search mode allows it, the whole workspace is
//! searched for a file of the same name. Every failure along the way
//! (missing file, I/O error, search error, dismissed prompt) collapses into
//! [`CandidateResult::NotFound`].

use std::path::Path;

use crate::host::{Document, DocumentOpener, SelectionPrompt, WorkspaceSearch};
use crate::path::SplitPath;

/// Default cap on workspace search results.
pub const DEFAULT_MAX_SEARCH_RESULTS: usize = 8;

/// Where a candidate may be looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Only the directory of the current file.
    SameDirectoryOnly,
    /// The directory of the current file, then the whole workspace.
    IncludeWorkspaceRoot,
}

impl SearchMode {
    /// Mode for a workspace-fallback toggle.
    #[must_use]
    pub const fn from_toggle(include_workspace_root: bool) -> Self {
        if include_workspace_root {
            Self::IncludeWorkspaceRoot
        } else {
            Self::SameDirectoryOnly
        }
    }

    /// Whether the workspace search may run.
    #[must_use]
    pub const fn searches_workspace(self) -> bool {
        matches!(self, Self::IncludeWorkspaceRoot)
    }
}

/// Outcome of looking for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateResult {
    /// The candidate was found and opened.
    Opened(Document),
    /// The candidate could not be resolved.
    NotFound,
}

/// Looks up companion candidates through the host collaborators.
pub struct CandidateLocator<'a> {
    opener: &'a dyn DocumentOpener,
    search: &'a dyn WorkspaceSearch,
    prompt: &'a dyn SelectionPrompt,
    max_results: usize,
    exclude: String,
}

impl<'a> CandidateLocator<'a> {
    /// Creates a locator with the default search cap and no exclusions.
    #[must_use]
    pub fn new(
        opener: &'a dyn DocumentOpener,
        search: &'a dyn WorkspaceSearch,
        prompt: &'a dyn SelectionPrompt,
    ) -> Self {
        Self {
            opener,
            search,
            prompt,
            max_results: DEFAULT_MAX_SEARCH_RESULTS,
            exclude: String::new(),
        }
    }

    /// Sets the maximum number of workspace search results.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the glob excluded from workspace searches.
    #[must_use]
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = exclude.into();
        self
    }

    /// Try to resolve the companion of `split` that carries `suffix`.
    #[must_use]
    pub fn locate(&self, split: &SplitPath, suffix: &str, mode: SearchMode) -> CandidateResult {
        let candidate = split.candidate(suffix);
        if let Some(document) = self.open(Path::new(&candidate)) {
            log::debug!("found {candidate} next to the current file");
            return CandidateResult::Opened(document);
        }

        if !mode.searches_workspace() {
            log::debug!("{candidate} not found, workspace search disabled");
            return CandidateResult::NotFound;
        }
        if split.base().is_empty() {
            log::debug!("{candidate} not found, empty base name is not searched");
            return CandidateResult::NotFound;
        }

        self.search_workspace(&split.candidate_name(suffix))
            .map_or(CandidateResult::NotFound, CandidateResult::Opened)
    }

    fn search_workspace(&self, file_name: &str) -> Option<Document> {
        let pattern = format!("**/{}", literal_glob(file_name));
        let mut matches = match self
            .search
            .find_files(&pattern, &self.exclude, self.max_results)
        {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("{e}");
                return None;
            }
        };

        match matches.len() {
            0 => {
                log::debug!("no file matches {pattern} in the workspace");
                None
            }
            1 => {
                let path = matches.pop()?;
                self.open(&path)
            }
            n => {
                log::debug!("{n} files match {pattern}, asking the user");
                let items: Vec<String> = matches
                    .iter()
                    .map(|path| path.to_string_lossy().into_owned())
                    .collect();
                let Some(choice) = self.prompt.choose(&items) else {
                    log::debug!("selection for {pattern} dismissed");
                    return None;
                };
                self.open(Path::new(&choice))
            }
        }
    }

    fn open(&self, path: &Path) -> Option<Document> {
        match self.opener.open(path) {
            Ok(document) => Some(document),
            Err(e) => {
                log::trace!("cannot open {}: {e}", path.display());
                None
            }
        }
    }
}

/// Glob that matches `name` literally.
///
/// Each glob metacharacter is wrapped in a one-character class; `]` is
/// already literal outside a class.
fn literal_glob(name: &str) -> String {
    let mut glob = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '[' | '*' | '?' | '{' | '}') {
            glob.push('[');
            glob.push(c);
            glob.push(']');
        } else {
            glob.push(c);
        }
    }
    glob
}
