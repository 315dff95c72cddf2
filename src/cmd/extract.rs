//! Extract command implementation
//!
//! Reads one or more AI responses, builds the requested digest for each and
//! prints a console report or JSON.

use anyhow::{Context, Result};
use console::style;
use rayon::prelude::*;
use serde::Serialize;
use std::env;

use crate::config::{ConfigFile, ConfigLoader};
use crate::fmt::{emoji, render_digest, MICROSCOPE};
use crate::infra::{read_stdin, RealFileSystem};
use crate::input::{load_inputs, InputSource, ResponseInput};
use crate::report::{Digest, DigestKind};

/// Flags accepted by `wpai-digest extract`
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Files to read; empty or `-` means stdin
    pub files: Vec<String>,
    /// Digest kind, overriding the config file
    pub kind: Option<String>,
    /// Force JSON output
    pub json: bool,
    /// Leave the raw response out of JSON envelopes
    pub no_analysis: bool,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSettings {
    /// Digest kind to build
    pub kind: DigestKind,
    /// Emit JSON
    pub json: bool,
    /// Keep `ai_analysis` in envelopes
    pub include_analysis: bool,
}

impl ExtractSettings {
    /// Merge CLI flags over config defaults
    pub fn resolve(args: &ExtractArgs, config: &ConfigFile) -> Result<Self> {
        let kind = match &args.kind {
            Some(kind) => kind.parse::<DigestKind>()?,
            None => config.digest_kind()?,
        };

        Ok(Self {
            kind,
            json: args.json || config.json,
            include_analysis: config.include_analysis && !args.no_analysis,
        })
    }
}

/// A digest labelled with the input it came from
#[derive(Debug, Clone, Serialize)]
pub struct SourcedDigest {
    /// Display name of the input
    pub source: String,
    /// The digest envelope
    pub report: Digest,
}

/// Run `wpai-digest extract`
///
/// # Examples
///
/// ```no_run
/// use wpai_digest::cmd::extract::{cmd_extract, ExtractArgs};
///
/// cmd_extract(&ExtractArgs {
///     files: vec!["scan.md".to_string()],
///     kind: Some("security".to_string()),
///     json: true,
///     no_analysis: false,
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_extract(args: &ExtractArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigLoader::load(&cwd)?;
    let settings = ExtractSettings::resolve(args, &config)?;
    log::debug!("extract settings: {:?}", settings);

    let inputs = load_inputs(InputSource::from_args(&args.files), &RealFileSystem, read_stdin)
        .context("Failed to load responses")?;

    let digests = build_digests(&inputs, settings.kind, settings.include_analysis);

    if settings.json {
        println!("{}", render_json(&digests)?);
    } else {
        print!("{}", render_console(&digests, settings.kind));
    }

    Ok(())
}

/// Build digests in parallel, preserving input order
pub fn build_digests(
    inputs: &[ResponseInput],
    kind: DigestKind,
    include_analysis: bool,
) -> Vec<SourcedDigest> {
    inputs
        .par_iter()
        .map(|input| {
            let digest = kind.digest(&input.text);
            let report = if include_analysis {
                digest
            } else {
                digest.without_analysis()
            };
            log::debug!(
                "{}: {} digest with {} recommendation(s)",
                input.source,
                report.kind(),
                report.recommendation_count()
            );
            SourcedDigest {
                source: input.source.to_string(),
                report,
            }
        })
        .collect()
}

/// JSON for one input is the bare envelope; several inputs become an array
pub fn render_json(digests: &[SourcedDigest]) -> Result<String> {
    let json = match digests {
        [single] => serde_json::to_string_pretty(&single.report),
        many => serde_json::to_string_pretty(many),
    };
    json.context("Failed to serialize digest to JSON")
}

/// Console report for all digests
pub fn render_console(digests: &[SourcedDigest], kind: DigestKind) -> String {
    let mut out = format!(
        "{} {} {} digest\n\n",
        emoji(&MICROSCOPE),
        style("wpai-digest").bold(),
        kind
    );

    for digest in digests {
        if digests.len() > 1 {
            out.push_str(&format!(
                "{} {}\n",
                style(&digest.source).cyan().bold(),
                style(format!(
                    "[{}, {} total]",
                    digest.report.kind(),
                    digest.report.recommendation_count()
                ))
                .dim()
            ));
        }
        out.push_str(&render_digest(&digest.report));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigestError;
    use std::path::PathBuf;

    fn input(name: &str, text: &str) -> ResponseInput {
        ResponseInput {
            source: InputSource::File(PathBuf::from(name)),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_resolve_uses_config_when_flags_absent() {
        let config = ConfigFile {
            kind: "database".to_string(),
            json: true,
            include_analysis: true,
        };
        let settings = ExtractSettings::resolve(&ExtractArgs::default(), &config).unwrap();
        assert_eq!(settings.kind, DigestKind::Database);
        assert!(settings.json);
        assert!(settings.include_analysis);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let args = ExtractArgs {
            kind: Some("code".to_string()),
            no_analysis: true,
            ..Default::default()
        };
        let settings = ExtractSettings::resolve(&args, &ConfigFile::default()).unwrap();
        assert_eq!(settings.kind, DigestKind::Code);
        assert!(!settings.json);
        assert!(!settings.include_analysis);
    }

    #[test]
    fn test_resolve_invalid_kind_flag_is_typed_error() {
        let args = ExtractArgs {
            kind: Some("perf".to_string()),
            ..Default::default()
        };
        let err = ExtractSettings::resolve(&args, &ConfigFile::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DigestError>(),
            Some(DigestError::InvalidKind { .. })
        ));
    }

    #[test]
    fn test_build_digests_preserves_input_order() {
        let inputs: Vec<ResponseInput> = (0..20)
            .map(|i| input(&format!("{}.md", i), &format!("You should fix item {}", i)))
            .collect();

        let digests = build_digests(&inputs, DigestKind::Security, true);
        let sources: Vec<String> = digests.iter().map(|d| d.source.clone()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("{}.md", i)).collect();
        assert_eq!(sources, expected);
    }

    #[test]
    fn test_render_json_single_input_is_bare_envelope() {
        let digests = build_digests(&[input("a.md", "## T\nbody")], DigestKind::Code, false);
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&digests).unwrap()).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["recommendations"][0]["title"], "T");
        assert!(json.get("ai_analysis").is_none());
    }

    #[test]
    fn test_render_json_many_inputs_is_sourced_array() {
        let digests = build_digests(
            &[input("a.md", "x"), input("b.md", "y")],
            DigestKind::Database,
            true,
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&digests).unwrap()).unwrap();

        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["source"], "b.md");
        assert_eq!(items[1]["report"]["ai_analysis"], "y");
    }

    #[test]
    fn test_render_console_labels_sources_for_batches() {
        let digests = build_digests(
            &[input("a.md", "x"), input("b.md", "y")],
            DigestKind::Security,
            true,
        );
        let out = render_console(&digests, DigestKind::Security);
        assert!(out.contains("a.md"));
        assert!(out.contains("b.md"));
        assert!(out.contains("security digest"));
    }

    #[test]
    fn test_render_console_batch_labels_carry_counts() {
        let digests = build_digests(
            &[
                input("a.md", "You should update core.\nYou must rotate salts."),
                input("b.md", "## Nonces\nVerify them."),
            ],
            DigestKind::Database,
            false,
        );
        let out = render_console(&digests, DigestKind::Database);
        assert!(out.contains("[database, 2 total]"));
        assert!(out.contains("[database, 0 total]"));
    }
}
