//! Command handlers for wpai-digest CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod extract;
pub mod init;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use extract::{cmd_extract, ExtractArgs};
pub use init::cmd_init;
