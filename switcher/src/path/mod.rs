//! Path handling for companion lookup.
//!
//! - [`normalize`]: lexical normalization (tilde expansion, absolute paths,
//!   `.`/`..` folding, backslash rewriting).
//! - [`split`]: decomposing a file path into directory, base name and the
//!   suffix the table classifies it by.
//!
//! # Examples
//!
//! ```
//! use switcher::path::SplitPath;
//! use switcher::SuffixTable;
//!
//! let table = SuffixTable::new([".h", ".cpp"]).unwrap();
//! let split = SplitPath::split("/src/widget.cpp", &table);
//!
//! assert_eq!(split.base(), "widget");
//! assert_eq!(split.candidate(".h"), "/src/widget.h");
//! ```

pub mod normalize;
pub mod split;

#[cfg(test)]
mod proptests;

pub use split::SplitPath;
