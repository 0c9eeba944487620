//! The suffix-cycling state machine.
//!
//! Starting from the suffix after the current file's suffix, each table
//! entry is handed to the [`CandidateLocator`] in turn, wrapping at the end
//! of the table, until a candidate opens ([`Resolution::Found`]) or the
//! cycle arrives back at the starting suffix ([`Resolution::Exhausted`]).
//! Candidates are tried strictly one after another.

use crate::host::Document;
use crate::locate::{CandidateLocator, CandidateResult, SearchMode};
use crate::path::SplitPath;
use crate::suffix::SuffixTable;

/// Position of one switch inside the suffix cycle.
///
/// Created fresh for every switch and dropped when it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionState<'s> {
    start_index: usize,
    current_index: usize,
    split: &'s SplitPath,
    mode: SearchMode,
}

impl<'s> ResolutionState<'s> {
    /// Enter the cycle for `split`, or `None` when its suffix is not in
    /// `table`.
    #[must_use]
    pub fn begin(table: &SuffixTable, split: &'s SplitPath, mode: SearchMode) -> Option<Self> {
        let start_index = split.suffix_index().filter(|&index| index < table.len())?;
        Some(Self {
            start_index,
            current_index: table.next(start_index),
            split,
            mode,
        })
    }

    /// Position of the current file's suffix.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Position to try next, or `None` once the cycle is complete.
    #[must_use]
    pub fn candidate(&self) -> Option<usize> {
        (self.current_index != self.start_index).then_some(self.current_index)
    }

    /// Move past the current candidate.
    pub fn advance(&mut self, table: &SuffixTable) {
        self.current_index = table.next(self.current_index);
    }

    /// The split path being resolved.
    #[must_use]
    pub fn split(&self) -> &'s SplitPath {
        self.split
    }

    /// Where candidates may be looked for.
    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}

/// Terminal result of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A companion was opened.
    Found {
        /// The opened companion.
        document: Document,
        /// Table position of the suffix that resolved.
        suffix_index: usize,
    },
    /// Every other suffix was tried without success.
    Exhausted {
        /// Number of candidates tried.
        tried: usize,
    },
    /// The file's suffix is not in the table; nothing was tried.
    UnknownSuffix,
}

/// Drives the suffix cycle for one table.
///
/// # Examples
///
/// ```
/// use switcher::host::{DismissPrompt, FsOpener, FsWorkspaceSearch};
/// use switcher::{CandidateLocator, Resolution, Resolver, SearchMode, SplitPath, SuffixTable};
///
/// let table = SuffixTable::new([".h", ".cpp"]).unwrap();
/// let search = FsWorkspaceSearch::new("/nonexistent");
/// let locator = CandidateLocator::new(&FsOpener, &search, &DismissPrompt);
/// let resolver = Resolver::new(&table, locator);
///
/// let split = SplitPath::split("/nonexistent/main.rs", &table);
/// assert_eq!(resolver.resolve(&split, SearchMode::SameDirectoryOnly), Resolution::UnknownSuffix);
/// ```
pub struct Resolver<'a> {
    table: &'a SuffixTable,
    locator: CandidateLocator<'a>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `table`.
    #[must_use]
    pub fn new(table: &'a SuffixTable, locator: CandidateLocator<'a>) -> Self {
        Self { table, locator }
    }

    /// Run the cycle for `split`.
    #[must_use]
    pub fn resolve(&self, split: &SplitPath, mode: SearchMode) -> Resolution {
        let Some(mut state) = ResolutionState::begin(self.table, split, mode) else {
            log::info!("unknown suffix: {}", split.rejoin());
            return Resolution::UnknownSuffix;
        };

        let mut tried = 0;
        while let Some(index) = state.candidate() {
            let Some(suffix) = self.table.at(index) else {
                break;
            };
            tried += 1;
            log::debug!("trying {} ({suffix})", state.split().candidate_name(suffix));

            match self.locator.locate(state.split(), suffix, state.mode()) {
                CandidateResult::Opened(document) => {
                    return Resolution::Found {
                        document,
                        suffix_index: index,
                    };
                }
                CandidateResult::NotFound => state.advance(self.table),
            }
        }

        log::info!(
            "no companion for {} after {tried} candidate(s)",
            split.rejoin()
        );
        Resolution::Exhausted { tried }
    }
}
