//! Error types for the switcher library.
//!
//! Resolution itself never fails with an [`Error`]: a missing companion is
//! reported through the outcome types in [`crate::resolver`] and
//! [`crate::operations`]. The variants here cover configuration, path
//! handling and the host collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a switcher error.
///
/// # Examples
///
/// ```
/// use switcher::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(8)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the switcher library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The suffix table has no entries.
    #[error("suffix table is empty")]
    EmptySuffixTable,

    /// A suffix table entry is unusable.
    #[error("invalid suffix at position {index}: {reason}")]
    InvalidSuffix {
        /// Position of the entry in the table.
        index: usize,
        /// The reason the entry is invalid.
        reason: String,
    },

    /// The workspace search could not be carried out.
    #[error("workspace search for '{pattern}' failed: {reason}")]
    Search {
        /// The glob pattern that was searched for.
        pattern: String,
        /// The reason the search failed.
        reason: String,
    },

    /// An opened document could not be shown to the user.
    #[error("cannot present {}: {reason}", path.display())]
    Present {
        /// The document path.
        path: PathBuf,
        /// The reason presentation failed.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },
}

impl Error {
    /// Check if error indicates something does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use switcher::Error;
    ///
    /// let err = Error::NotFound { resource: "/src/foo.cpp".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error comes from configuration validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::EmptySuffixTable | Self::InvalidSuffix { .. }
        )
    }
}
