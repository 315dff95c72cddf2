#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! wpai-digest library
//!
//! Turns free-form AI assistant responses from WordPress tooling into
//! structured digests: actionable recommendation lines, database
//! optimization summaries and heading-delimited code review sections.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use wpai_digest::extract::{extract_optimization_summary, extract_recommendations};
//!
//! let response = "## Database\n\
//!                 Optimized table wp_options.\n\
//!                 Space saved: 12 MB total.\n\
//!                 You should schedule weekly cleanups.";
//!
//! let summary = extract_optimization_summary(response);
//! assert_eq!(summary.tables_optimized, 1);
//! assert_eq!(summary.space_saved, "Space saved: 12 MB total.");
//! assert_eq!(summary.recommendations, extract_recommendations(response));
//! ```
//!
//! # Report Envelopes
//!
//! ```
//! use wpai_digest::report::DigestKind;
//!
//! let digest = DigestKind::Security.digest("You must disable file editing in wp-config.php");
//! let json = serde_json::to_value(&digest)?;
//!
//! assert_eq!(json["status"], "success");
//! assert_eq!(json["recommendations"][0], "You must disable file editing in wp-config.php");
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Recommendation extractors
pub mod extract;
/// Console formatting
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Response input loading
pub mod input;
/// Digest kinds and report envelopes
pub mod report;
