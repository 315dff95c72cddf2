//! Error types with contextual suggestions
//!
//! Extraction itself never fails; these errors cover the edges of the tool:
//! reading inputs, loading configuration and validating CLI values. Each
//! variant carries a suggestion and a sysexits.h-style exit code.
//!
//! # Examples
//!
//! ```
//! use wpai_digest::error::DigestError;
//!
//! let error = DigestError::InvalidKind {
//!     kind: "perf".to_string(),
//!     valid: vec!["security".to_string(), "database".to_string(), "code".to_string()],
//! };
//!
//! assert_eq!(error.exit_code(), 64);
//! assert!(error.suggestion().contains("security"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by wpai-digest commands
#[derive(Error, Debug)]
pub enum DigestError {
    /// Input file does not exist
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// Path to missing file
        path: PathBuf,
    },

    /// Unknown digest kind
    #[error("Unknown digest kind: '{kind}'")]
    InvalidKind {
        /// Kind as given
        kind: String,
        /// Accepted kind names
        valid: Vec<String>,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Refusing to overwrite an existing config file
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to existing config file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl DigestError {
    /// Get an actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> String {
        match self {
            Self::InputNotFound { path } => format!(
                "Check that {} exists, or pipe the response on stdin",
                path.display()
            ),
            Self::InvalidKind { valid, .. } => format!("Valid kinds: {}", valid.join(", ")),
            Self::InvalidConfig { .. } => {
                "Fix the file or regenerate it with 'wpai-digest init --force'".to_string()
            }
            Self::ConfigExists { .. } => {
                "Pass --force to overwrite the existing configuration".to_string()
            }
            Self::Io { context, .. } => format!(
                "Check file permissions and that {} is accessible",
                context
            ),
        }
    }

    /// Get the exit code for this error, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidKind { .. } => 64,   // EX_USAGE
            Self::InvalidConfig { .. } => 78, // EX_CONFIG
            Self::ConfigExists { .. } => 73,  // EX_CANTCREAT
            Self::Io { .. } => 74,            // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(digest_error) = Self::find(error) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                digest_error.suggestion()
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, DigestError::exit_code)
    }

    // `.context()` wraps the typed error, so look through the whole chain
    fn find(error: &anyhow::Error) -> Option<&DigestError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<DigestError>())
    }
}
