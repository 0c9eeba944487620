//! The switch operation: from the active file to its companion.

use std::path::PathBuf;

use crate::config::Config;
use crate::host::{
    ActiveDocument, Document, DocumentOpener, DocumentPresenter, SelectionPrompt, WorkspaceSearch,
};
use crate::locate::{CandidateLocator, SearchMode, DEFAULT_MAX_SEARCH_RESULTS};
use crate::path::SplitPath;
use crate::resolver::{Resolution, Resolver};
use crate::suffix::SuffixTable;

/// Which command started the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// Plain switch; the workspace fallback follows configuration.
    Switch,
    /// Switch that always falls back to a workspace search.
    SwitchWorkspace,
}

impl EntryPoint {
    /// Search mode for this entry point under the configured toggle.
    ///
    /// # Examples
    ///
    /// ```
    /// use switcher::operations::EntryPoint;
    /// use switcher::SearchMode;
    ///
    /// assert_eq!(EntryPoint::Switch.search_mode(false), SearchMode::SameDirectoryOnly);
    /// assert_eq!(
    ///     EntryPoint::SwitchWorkspace.search_mode(false),
    ///     SearchMode::IncludeWorkspaceRoot
    /// );
    /// ```
    #[must_use]
    pub const fn search_mode(self, include_workspace_root: bool) -> SearchMode {
        match self {
            Self::Switch => SearchMode::from_toggle(include_workspace_root),
            Self::SwitchWorkspace => SearchMode::IncludeWorkspaceRoot,
        }
    }
}

/// Options for a switch operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOptions {
    /// Workspace fallback for [`EntryPoint::Switch`].
    pub include_workspace_root: bool,

    /// Cap on workspace search results.
    pub max_search_results: usize,

    /// Glob excluded from workspace searches.
    pub search_exclude: String,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            include_workspace_root: true,
            max_search_results: DEFAULT_MAX_SEARCH_RESULTS,
            search_exclude: String::new(),
        }
    }
}

impl SwitchOptions {
    /// Sets the workspace fallback toggle.
    #[must_use]
    pub fn with_include_workspace_root(mut self, include: bool) -> Self {
        self.include_workspace_root = include;
        self
    }

    /// Sets the search result cap.
    #[must_use]
    pub fn with_max_search_results(mut self, max: usize) -> Self {
        self.max_search_results = max;
        self
    }

    /// Sets the exclusion glob.
    #[must_use]
    pub fn with_search_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.search_exclude = exclude.into();
        self
    }
}

impl From<&Config> for SwitchOptions {
    fn from(config: &Config) -> Self {
        Self {
            include_workspace_root: config.include_workspace_root(),
            max_search_results: config.max_search_results(),
            search_exclude: config.search_exclude().to_string(),
        }
    }
}

/// The host collaborators one switch talks to.
#[derive(Clone, Copy)]
pub struct SwitchHost<'a> {
    /// Opens candidate files.
    pub opener: &'a dyn DocumentOpener,
    /// Searches the workspace.
    pub search: &'a dyn WorkspaceSearch,
    /// Disambiguates several search results.
    pub prompt: &'a dyn SelectionPrompt,
    /// Shows the resolved companion.
    pub presenter: &'a dyn DocumentPresenter,
}

/// What one switch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Nothing is focused; nothing was done.
    NoActiveDocument,
    /// The active file's suffix is not configured; nothing was tried.
    UnknownSuffix {
        /// The active file.
        path: PathBuf,
    },
    /// The companion was opened and handed to the presenter.
    Switched {
        /// The opened companion.
        document: Document,
        /// Suffix of the companion, as configured.
        suffix: String,
    },
    /// Every other suffix was tried without success.
    Exhausted {
        /// The active file.
        path: PathBuf,
        /// Number of candidates tried.
        tried: usize,
    },
}

impl SwitchOutcome {
    /// Whether a companion was opened.
    #[must_use]
    pub const fn is_switched(&self) -> bool {
        matches!(self, Self::Switched { .. })
    }
}

/// Runs switches for one suffix table.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use switcher::host::{DismissPrompt, FsOpener, FsWorkspaceSearch};
/// use switcher::operations::{EntryPoint, SwitchHost, SwitchOptions, Switcher};
/// # use switcher::host::{Document, DocumentPresenter};
/// # struct Print;
/// # impl DocumentPresenter for Print {
/// #     fn present(&self, d: &Document) -> switcher::Result<()> { println!("{d}"); Ok(()) }
/// # }
/// use switcher::SuffixTable;
///
/// let table = SuffixTable::new([".h", ".cpp"]).unwrap();
/// let search = FsWorkspaceSearch::new("/work/project");
/// let host = SwitchHost {
///     opener: &FsOpener,
///     search: &search,
///     prompt: &DismissPrompt,
///     presenter: &Print,
/// };
///
/// let switcher = Switcher::new(&table, SwitchOptions::default(), host);
/// let outcome = switcher.run(Path::new("/work/project/src/widget.h"), EntryPoint::Switch);
/// println!("{outcome:?}");
/// ```
pub struct Switcher<'a> {
    table: &'a SuffixTable,
    options: SwitchOptions,
    host: SwitchHost<'a>,
}

impl<'a> Switcher<'a> {
    /// Creates a switcher.
    #[must_use]
    pub fn new(table: &'a SuffixTable, options: SwitchOptions, host: SwitchHost<'a>) -> Self {
        Self {
            table,
            options,
            host,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &SwitchOptions {
        &self.options
    }

    /// Switch from the active document to its companion.
    ///
    /// A presenter failure is logged; the companion still counts as
    /// opened.
    pub fn run<A>(&self, active: &A, entry: EntryPoint) -> SwitchOutcome
    where
        A: ActiveDocument + ?Sized,
    {
        let Some(path) = active.active_path() else {
            log::info!("no active document, nothing to switch");
            return SwitchOutcome::NoActiveDocument;
        };

        let split = SplitPath::from_path(&path, self.table);
        let mode = entry.search_mode(self.options.include_workspace_root);
        log::debug!("switching from {split} ({entry:?}, {mode:?})");

        let locator = CandidateLocator::new(self.host.opener, self.host.search, self.host.prompt)
            .with_max_results(self.options.max_search_results)
            .with_exclude(self.options.search_exclude.as_str());

        match Resolver::new(self.table, locator).resolve(&split, mode) {
            Resolution::Found {
                document,
                suffix_index,
            } => {
                if let Err(e) = self.host.presenter.present(&document) {
                    log::warn!("{e}");
                }
                let suffix = self.table.at(suffix_index).unwrap_or_default().to_string();
                log::info!("switched to {document}");
                SwitchOutcome::Switched { document, suffix }
            }
            Resolution::Exhausted { tried } => {
                log::warn!("no companion file found for {}", path.display());
                SwitchOutcome::Exhausted { path, tried }
            }
            Resolution::UnknownSuffix => SwitchOutcome::UnknownSuffix { path },
        }
    }
}
