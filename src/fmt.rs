//! Console output for digests

use console::{style, Emoji};

use crate::extract::{CodeRecommendation, OptimizationSummary};
use crate::report::{CodeReviewReport, DatabaseReport, Digest, SecurityScanReport};

/// Microscope emoji for analysis headers
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Shield emoji for security digests
pub const SHIELD: Emoji = Emoji("🛡️", "#");

/// Database emoji for optimization digests
pub const DATABASE: Emoji = Emoji("🗄️", "#");

/// Memo emoji for code review digests
pub const MEMO: Emoji = Emoji("📝", "#");

/// Bullet for list items
pub const BULLET: Emoji = Emoji("•", "-");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Emoji output is off when `NO_EMOJI` is set (the `--no-emoji` flag sets it)
pub fn emoji(e: &Emoji<'static, 'static>) -> &'static str {
    if std::env::var_os("NO_EMOJI").is_some() {
        e.1
    } else {
        e.0
    }
}

/// Render a digest as console text
pub fn render_digest(digest: &Digest) -> String {
    match digest {
        Digest::Security(report) => render_security(report),
        Digest::Database(report) => render_database(report),
        Digest::Code(report) => render_code_review(report),
    }
}

fn render_security(report: &SecurityScanReport) -> String {
    let mut out = header(&SHIELD, "Security Recommendations", report.recommendations.len());
    push_lines(&mut out, &report.recommendations);
    out
}

fn render_database(report: &DatabaseReport) -> String {
    let summary = &report.optimization_summary;
    let mut out = header(&DATABASE, "Database Optimization", summary.recommendations.len());
    out.push_str(&render_summary_fields(summary));
    out.push('\n');
    push_lines(&mut out, &summary.recommendations);
    out
}

fn render_summary_fields(summary: &OptimizationSummary) -> String {
    format!(
        "  {} {}\n  {} {}\n  {} {}\n",
        style("Tables optimized:").bold(),
        style(summary.tables_optimized).cyan().bold(),
        style("Space saved:").bold(),
        summary.space_saved,
        style("Performance:").bold(),
        style(&summary.performance_improvement).dim(),
    )
}

fn render_code_review(report: &CodeReviewReport) -> String {
    let mut out = header(&MEMO, "Code Review", report.recommendations.len());
    if report.recommendations.is_empty() {
        out.push_str(&none_found());
    }
    for (i, rec) in report.recommendations.iter().enumerate() {
        out.push_str(&render_code_recommendation(i + 1, rec));
    }
    out
}

fn render_code_recommendation(index: usize, rec: &CodeRecommendation) -> String {
    let title = if rec.title.is_empty() {
        "(untitled)"
    } else {
        rec.title.as_str()
    };
    let mut out = format!("  {:2}. {}\n", index, style(title).bold());
    if let Some(description) = &rec.description {
        out.push_str(&format!("      {}\n", description));
    }
    out
}

fn header(icon: &Emoji<'static, 'static>, title: &str, count: usize) -> String {
    format!(
        "{} {} {}\n{}\n",
        emoji(icon),
        style(title).bold().underlined(),
        style(format!("({} found)", count)).dim(),
        style("─".repeat(60)).dim()
    )
}

fn push_lines(out: &mut String, lines: &[String]) {
    if lines.is_empty() {
        out.push_str(&none_found());
    }
    for line in lines {
        out.push_str(&format!("  {} {}\n", emoji(&BULLET), line));
    }
}

fn none_found() -> String {
    format!("  {} No recommendations found\n", emoji(&INFO))
}
