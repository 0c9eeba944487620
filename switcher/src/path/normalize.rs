//! Path normalization helpers.
//!
//! Everything here is lexical: symlinks are never followed and the
//! filesystem is only consulted for the current directory and the home
//! directory.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Rewrite backslash separators as forward slashes.
///
/// # Examples
///
/// ```
/// use switcher::path::normalize::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(r"C:\src\foo.h"), "C:/src/foo.h");
/// assert_eq!(to_forward_slashes("/src/foo.h"), "/src/foo.h");
/// ```
#[must_use]
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` forms are rejected.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8, uses `~user` syntax,
/// or the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use switcher::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/src/foo.h")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("src/foo.h"));
///
/// assert_eq!(expand_tilde(Path::new("/src")).unwrap(), Path::new("/src"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(text) = path.to_str() else {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        });
    };

    let rest = match text.strip_prefix('~') {
        None => return Ok(path.to_path_buf()),
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        Some(_) => {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "only ~ and ~/ are expanded".to_string(),
            })
        }
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "home directory is unknown".to_string(),
    })?;

    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

/// Remove `.` components and fold `..` into their parent.
///
/// A `..` at the root stays at the root, as it does on POSIX systems.
/// Leading `..` components of a relative path are kept.
///
/// # Examples
///
/// ```
/// use switcher::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/src/./lib/../foo.h")), PathBuf::from("/src/foo.h"));
/// assert_eq!(clean(Path::new("/../foo.h")), PathBuf::from("/foo.h"));
/// assert_eq!(clean(Path::new("../foo.h")), PathBuf::from("../foo.h"));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make `path` absolute against `base` (after tilde expansion) and clean it.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
pub fn absolute_from(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(clean(&expanded))
    } else {
        Ok(clean(&base.join(expanded)))
    }
}

/// Make `path` absolute against the current directory and clean it.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory is
/// unavailable.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot read current directory: {e}"),
    })?;
    absolute_from(path, &cwd)
}
