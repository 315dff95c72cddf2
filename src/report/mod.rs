//! Digest kinds and their report envelopes
//!
//! A [`DigestKind`] selects which extractor runs over a response and which
//! envelope wraps the result.
//!
//! # Examples
//!
//! ```
//! use wpai_digest::report::{Digest, DigestKind};
//!
//! let kind: DigestKind = "database".parse()?;
//! let digest = kind.digest("Optimized table wp_posts\nSaved 2 MB");
//!
//! match digest {
//!     Digest::Database(report) => {
//!         assert_eq!(report.optimization_summary.tables_optimized, 1);
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), wpai_digest::error::DigestError>(())
//! ```

pub mod envelope;

pub use envelope::{CodeReviewReport, DatabaseReport, SecurityScanReport, STATUS_SUCCESS};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

/// Which digest to build from a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestKind {
    /// Generic recommendations from a security scan narrative
    #[default]
    Security,
    /// Optimization summary from a database maintenance narrative
    Database,
    /// Heading-delimited sections from a code review
    Code,
}

impl DigestKind {
    /// All kinds, in display order
    pub const ALL: [DigestKind; 3] = [DigestKind::Security, DigestKind::Database, DigestKind::Code];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Database => "database",
            Self::Code => "code",
        }
    }

    /// Envelope `message` that identifies this kind
    pub fn message(&self) -> &'static str {
        match self {
            Self::Security => SecurityScanReport::MESSAGE,
            Self::Database => DatabaseReport::MESSAGE,
            Self::Code => CodeReviewReport::MESSAGE,
        }
    }

    /// Build the digest for this kind from an AI response
    pub fn digest(&self, response: &str) -> Digest {
        match self {
            Self::Security => Digest::Security(SecurityScanReport::from_response(response)),
            Self::Database => Digest::Database(DatabaseReport::from_response(response)),
            Self::Code => Digest::Code(CodeReviewReport::from_response(response)),
        }
    }

    fn valid_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.as_str().to_string()).collect()
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestKind {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "database" | "db" => Ok(Self::Database),
            "code" | "review" => Ok(Self::Code),
            _ => Err(DigestError::InvalidKind {
                kind: s.to_string(),
                valid: Self::valid_names(),
            }),
        }
    }
}

/// A built digest, serialized as its bare envelope
///
/// Envelopes share most of their shape, so reading one back dispatches on
/// its `message` rather than on which fields happen to fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Digest {
    /// Security scan envelope
    Security(SecurityScanReport),
    /// Database optimization envelope
    Database(DatabaseReport),
    /// Code validation envelope
    Code(CodeReviewReport),
}

impl Digest {
    /// Kind this digest was built for
    pub fn kind(&self) -> DigestKind {
        match self {
            Self::Security(_) => DigestKind::Security,
            Self::Database(_) => DigestKind::Database,
            Self::Code(_) => DigestKind::Code,
        }
    }

    /// Drop the raw response from the envelope
    pub fn without_analysis(mut self) -> Self {
        match &mut self {
            Self::Security(r) => r.ai_analysis = None,
            Self::Database(r) => r.ai_analysis = None,
            Self::Code(r) => r.ai_analysis = None,
        }
        self
    }

    /// Number of recommendations carried, whatever their shape
    pub fn recommendation_count(&self) -> usize {
        match self {
            Self::Security(r) => r.recommendations.len(),
            Self::Database(r) => r.optimization_summary.recommendations.len(),
            Self::Code(r) => r.recommendations.len(),
        }
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();

        let kind = DigestKind::ALL
            .into_iter()
            .find(|kind| kind.message() == message)
            .ok_or_else(|| D::Error::custom(format!("unknown digest message: {:?}", message)))?;

        let digest = match kind {
            DigestKind::Security => serde_json::from_value(value).map(Digest::Security),
            DigestKind::Database => serde_json::from_value(value).map(Digest::Database),
            DigestKind::Code => serde_json::from_value(value).map(Digest::Code),
        };
        digest.map_err(D::Error::custom)
    }
}
