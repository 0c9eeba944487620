#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # switcher
//!
//! A library for switching between companion files: a header and its
//! implementation, a source file and its test, or any other pair of files
//! that share a base name and differ by suffix.
//!
//! The suffix of the current file is looked up in an ordered
//! [`SuffixTable`]; the other suffixes are then tried in table order,
//! wrapping around, first next to the current file and optionally across
//! the whole workspace.
//!
//! ## Core Types
//!
//! - [`SuffixTable`]: the ordered suffix list and its cycle
//! - [`SplitPath`]: a file path split into directory, base and suffix
//! - [`CandidateLocator`]: resolves one candidate through the host
//! - [`Resolver`]: the suffix-cycling state machine
//! - [`operations::Switcher`]: the user-facing switch operation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use switcher::{SplitPath, SuffixTable};
//!
//! let table = SuffixTable::new([".h", ".hpp", ".cpp"]).unwrap();
//! let split = SplitPath::split("/src/widget.hpp", &table);
//!
//! assert_eq!(split.suffix_index(), Some(1));
//! let order: Vec<&str> = table
//!     .cycle_from(1)
//!     .filter_map(|i| table.at(i))
//!     .collect();
//! assert_eq!(order, vec![".cpp", ".h"]);
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod locate;
pub mod logging;
pub mod operations;
pub mod path;
pub mod resolver;
pub mod suffix;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use host::{ActiveDocument, Document};
pub use locate::{CandidateLocator, CandidateResult, SearchMode, DEFAULT_MAX_SEARCH_RESULTS};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{EntryPoint, SwitchHost, SwitchOptions, SwitchOutcome, Switcher};
pub use path::SplitPath;
pub use resolver::{Resolution, ResolutionState, Resolver};
pub use suffix::{CycleOrder, SuffixTable};
