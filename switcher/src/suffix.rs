//! The ordered suffix table that drives companion switching.
//!
//! Entry order is significant: it is the matching preference when a file
//! name is classified and the order in which companions are tried.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

#[cfg(test)]
mod proptests;

/// An ordered, non-empty list of filename suffixes.
///
/// Duplicate entries are allowed; they only cause the same candidate to be
/// tried twice.
///
/// # Examples
///
/// ```
/// use switcher::SuffixTable;
///
/// let table = SuffixTable::new([".h", ".cpp"]).unwrap();
/// assert_eq!(table.index_of(".cpp"), Some(1));
/// assert_eq!(table.next(1), 0);
/// assert!(SuffixTable::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuffixTable {
    entries: Vec<String>,
}

impl SuffixTable {
    /// Builds a table from suffixes in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySuffixTable`] if no entries are given, and
    /// [`Error::InvalidSuffix`] if an entry is empty or contains a path
    /// separator or NUL byte.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(Error::EmptySuffixTable);
        }

        for (index, entry) in entries.iter().enumerate() {
            let reason = if entry.is_empty() {
                "suffix is empty"
            } else if entry.contains('/') || entry.contains('\\') {
                "suffix contains a path separator"
            } else if entry.contains('\0') {
                "suffix contains a null byte"
            } else {
                continue;
            };
            return Err(Error::InvalidSuffix {
                index,
                reason: reason.into(),
            });
        }

        Ok(Self { entries })
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty tables cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First position whose entry equals `suffix` exactly (case-sensitive).
    #[must_use]
    pub fn index_of(&self, suffix: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == suffix)
    }

    /// Bounds-checked fetch.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// The position after `index`, wrapping to 0 at the end of the table.
    #[must_use]
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Classifies a file name by its suffix.
    ///
    /// Returns the position of the **first** entry that is a case-insensitive
    /// (ASCII) trailing match of `file_name`. A longer entry listed later
    /// never wins over a shorter one listed earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use switcher::SuffixTable;
    ///
    /// let table = SuffixTable::new([".h", ".test.h"]).unwrap();
    /// assert_eq!(table.detect("widget.test.h"), Some(0));
    /// assert_eq!(table.detect("WIDGET.H"), Some(0));
    /// assert_eq!(table.detect("widget.rs"), None);
    /// ```
    #[must_use]
    pub fn detect(&self, file_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| trailing_match(file_name, entry))
    }

    /// Iterates the candidate positions tried after `start`, in cycle order.
    ///
    /// The start position itself is never yielded, so at most `len() - 1`
    /// positions come out. An out-of-range `start` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use switcher::SuffixTable;
    ///
    /// let table = SuffixTable::new([".h", ".c", ".cpp"]).unwrap();
    /// let order: Vec<usize> = table.cycle_from(1).collect();
    /// assert_eq!(order, vec![2, 0]);
    /// ```
    #[must_use]
    pub fn cycle_from(&self, start: usize) -> CycleOrder<'_> {
        CycleOrder {
            table: self,
            start,
            current: if start < self.len() {
                self.next(start)
            } else {
                start
            },
        }
    }

    /// Iterates the entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for SuffixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.entries.join(", "))
    }
}

/// Iterator over the positions visited by one switch cycle.
///
/// Created by [`SuffixTable::cycle_from`].
#[derive(Debug, Clone)]
pub struct CycleOrder<'a> {
    table: &'a SuffixTable,
    start: usize,
    current: usize,
}

impl Iterator for CycleOrder<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == self.start {
            return None;
        }
        let index = self.current;
        self.current = self.table.next(index);
        Some(index)
    }
}

/// Case-insensitive (ASCII) test that `name` ends with `suffix`.
pub(crate) fn trailing_match(name: &str, suffix: &str) -> bool {
    name.len()
        .checked_sub(suffix.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
