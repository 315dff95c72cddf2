//! Configuration for wpai-digest
//!
//! This module provides:
//! - .wpai-digest.toml config file support
//! - Loading with defaults when the file is absent

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
