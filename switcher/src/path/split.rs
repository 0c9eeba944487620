//! Splitting a file path into directory, base name and suffix.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::path::normalize::to_forward_slashes;
use crate::suffix::SuffixTable;

/// A file path decomposed against a [`SuffixTable`].
///
/// Paths are kept as `/`-separated strings. When the suffix is present,
/// `directory + "/" + base + suffix` is the separator-normalized input.
/// `suffix` holds the text as it appears in the file name, which may differ
/// in ASCII case from the table entry at `suffix_index`.
///
/// # Examples
///
/// ```
/// use switcher::{SplitPath, SuffixTable};
///
/// let table = SuffixTable::new([".h", ".cpp"]).unwrap();
/// let split = SplitPath::split(r"C:\src\Foo.H", &table);
///
/// assert_eq!(split.directory(), "C:/src");
/// assert_eq!(split.base(), "Foo");
/// assert_eq!(split.suffix(), Some(".H"));
/// assert_eq!(split.suffix_index(), Some(0));
/// assert_eq!(split.candidate(".cpp"), "C:/src/Foo.cpp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPath {
    directory: String,
    base: String,
    suffix: Option<String>,
    suffix_index: Option<usize>,
}

impl SplitPath {
    /// Split `path` using the first table entry that trail-matches its file
    /// name.
    ///
    /// A path without any separator is taken to live in `.`. When no entry
    /// matches, `base` is the whole file name and the suffix is absent.
    #[must_use]
    pub fn split(path: &str, table: &SuffixTable) -> Self {
        let normalized = to_forward_slashes(path);
        let (directory, file_name) = match normalized.rfind('/') {
            Some(pos) => (&normalized[..pos], &normalized[pos + 1..]),
            None => (".", normalized.as_str()),
        };

        let Some(index) = table.detect(file_name) else {
            return Self {
                directory: directory.to_string(),
                base: file_name.to_string(),
                suffix: None,
                suffix_index: None,
            };
        };

        // detect() guarantees the entry fits at a char boundary
        let entry_len = table.at(index).map_or(0, str::len);
        let (base, suffix) = file_name.split_at(file_name.len() - entry_len);

        Self {
            directory: directory.to_string(),
            base: base.to_string(),
            suffix: Some(suffix.to_string()),
            suffix_index: Some(index),
        }
    }

    /// Split a filesystem path. Non-UTF-8 sequences are replaced lossily.
    #[must_use]
    pub fn from_path(path: &Path, table: &SuffixTable) -> Self {
        Self::split(&path.to_string_lossy(), table)
    }

    /// The `/`-separated directory part.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The file name with the matched suffix stripped.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The matched suffix as written in the file name.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Position of the matched entry in the table.
    #[must_use]
    pub fn suffix_index(&self) -> Option<usize> {
        self.suffix_index
    }

    /// The file name of the companion carrying `suffix`.
    #[must_use]
    pub fn candidate_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.base)
    }

    /// The same-directory path of the companion carrying `suffix`.
    #[must_use]
    pub fn candidate(&self, suffix: &str) -> String {
        format!("{}/{}", self.directory, self.candidate_name(suffix))
    }

    /// Reassemble the path this value was split from.
    #[must_use]
    pub fn rejoin(&self) -> String {
        self.candidate(self.suffix().unwrap_or(""))
    }
}

impl fmt::Display for SplitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.directory,
            self.base,
            self.suffix().unwrap_or("-")
        )
    }
}
