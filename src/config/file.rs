//! Configuration file data structures

use serde::{Deserialize, Serialize};

use crate::error::DigestError;
use crate::report::DigestKind;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".wpai-digest.toml";

/// wpai-digest configuration file structure
///
/// Only CLI defaults live here. Extraction thresholds are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Digest kind used when `--kind` is not given
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Emit JSON instead of a console report
    #[serde(default)]
    pub json: bool,

    /// Embed the raw response as `ai_analysis` in JSON envelopes
    #[serde(default = "default_include_analysis")]
    pub include_analysis: bool,
}

fn default_kind() -> String {
    DigestKind::default().to_string()
}

fn default_include_analysis() -> bool {
    true
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            json: false,
            include_analysis: default_include_analysis(),
        }
    }
}

impl ConfigFile {
    /// Resolve the configured kind
    pub fn digest_kind(&self) -> Result<DigestKind, DigestError> {
        self.kind.parse()
    }
}
