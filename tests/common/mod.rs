//! Common test utilities and helpers
//!
//! Shared fixtures for integration tests: sample AI responses and
//! temporary workspaces holding them.

pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the wpai-digest binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wpai-digest"));
    cmd.env("NO_EMOJI", "1");
    cmd
}
