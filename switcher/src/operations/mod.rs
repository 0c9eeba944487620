//! User-facing operations.
//!
//! Each operation bundles configuration and the host collaborators and
//! reports what happened through a typed outcome instead of an error.
//!
//! # Examples
//!
//! ```no_run
//! use switcher::config::ConfigBuilder;
//! use switcher::host::{Document, DocumentPresenter, DismissPrompt, FsOpener, FsWorkspaceSearch};
//! use switcher::operations::{EntryPoint, SwitchHost, SwitchOptions, Switcher};
//! use std::path::Path;
//!
//! struct Print;
//! impl DocumentPresenter for Print {
//!     fn present(&self, document: &Document) -> switcher::Result<()> {
//!         println!("{document}");
//!         Ok(())
//!     }
//! }
//!
//! let active = Path::new("/work/project/src/widget.cpp");
//! let config = ConfigBuilder::new().with_working_dir(Path::new("/work/project/src")).build().unwrap();
//! let table = config.suffix_table().unwrap();
//! let search = FsWorkspaceSearch::new("/work/project");
//! let host = SwitchHost { opener: &FsOpener, search: &search, prompt: &DismissPrompt, presenter: &Print };
//!
//! let outcome = Switcher::new(&table, SwitchOptions::from(&config), host).run(active, EntryPoint::Switch);
//! assert!(outcome.is_switched());
//! ```

pub mod switch;

pub use switch::{EntryPoint, SwitchHost, SwitchOptions, SwitchOutcome, Switcher};
