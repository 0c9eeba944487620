//! CLI command implementations.
//!
//! - `switch`: switch to the companion of a file
//! - `switch_workspace`: switch, always searching the workspace
//! - `split`: show how a file name is classified
//! - `validate`: validate configuration
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod split;
pub mod switch;
pub mod validate;

pub use completions::CompletionsCommand;
pub use split::SplitCommand;
pub use switch::{SwitchCommand, SwitchWorkspaceCommand};
pub use validate::ValidateCommand;
