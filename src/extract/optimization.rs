//! Database optimization summary extraction

use serde::{Deserialize, Serialize};

use super::recommendations::extract_recommendations;

/// Default `space_saved` value when the response reports nothing
pub const DEFAULT_SPACE_SAVED: &str = "0 MB";

/// Default `performance_improvement` value
pub const DEFAULT_PERFORMANCE_IMPROVEMENT: &str = "Unknown";

/// Digest of a database optimization narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    /// Number of lines reporting an optimized table
    pub tables_optimized: u32,
    /// Last line reporting saved space, trimmed
    pub space_saved: String,
    /// Never derived from the response text; stays "Unknown" unless a caller sets it
    pub performance_improvement: String,
    /// Generic recommendations found anywhere in the response
    pub recommendations: Vec<String>,
}

impl Default for OptimizationSummary {
    fn default() -> Self {
        Self {
            tables_optimized: 0,
            space_saved: DEFAULT_SPACE_SAVED.to_string(),
            performance_improvement: DEFAULT_PERFORMANCE_IMPROVEMENT.to_string(),
            recommendations: Vec::new(),
        }
    }
}

/// Summarize a database optimization response
///
/// Every line mentioning both "optimized" and "table" counts as one optimized
/// table. Otherwise, a line mentioning "saved" together with "mb" or "gb"
/// replaces `space_saved`, so the last such line wins.
///
/// # Examples
///
/// ```
/// use wpai_digest::extract::extract_optimization_summary;
///
/// let summary = extract_optimization_summary("Optimized 3 tables.\nSpace saved: 12 MB total.");
/// assert_eq!(summary.tables_optimized, 1);
/// assert_eq!(summary.space_saved, "Space saved: 12 MB total.");
/// assert_eq!(summary.performance_improvement, "Unknown");
/// ```
pub fn extract_optimization_summary(text: &str) -> OptimizationSummary {
    let mut summary = OptimizationSummary::default();

    for line in text.split('\n') {
        let lower = line.to_lowercase();
        if lower.contains("optimized") && lower.contains("table") {
            summary.tables_optimized = summary.tables_optimized.saturating_add(1);
        } else if lower.contains("saved") && (lower.contains("mb") || lower.contains("gb")) {
            summary.space_saved = line.trim().to_string();
        }
    }

    summary.recommendations = extract_recommendations(text);

    log::debug!(
        "optimization summary: {} table line(s), space saved '{}'",
        summary.tables_optimized,
        summary.space_saved
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_optimization_summary_counts_and_space_saved() {
        let summary = extract_optimization_summary("Optimized 3 tables.\nSpace saved: 12 MB total.");
        assert_eq!(summary.tables_optimized, 1);
        assert_eq!(summary.space_saved, "Space saved: 12 MB total.");
        assert_eq!(summary.performance_improvement, "Unknown");
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn test_extract_optimization_summary_empty_input_returns_defaults() {
        assert_eq!(extract_optimization_summary(""), OptimizationSummary::default());
        assert_eq!(
            extract_optimization_summary("  \n \n"),
            OptimizationSummary::default()
        );
    }

    #[test]
    fn test_extract_optimization_summary_last_space_saved_wins() {
        let text = "Saved 4 MB on wp_posts\nOverall we saved 1.2 GB of disk\n";
        let summary = extract_optimization_summary(text);
        assert_eq!(summary.space_saved, "Overall we saved 1.2 GB of disk");
    }

    #[test]
    fn test_extract_optimization_summary_counts_every_matching_line() {
        let text = "Optimized table wp_posts\n\
                    Optimized table wp_posts\n\
                    wp_options TABLE was OPTIMIZED";
        assert_eq!(extract_optimization_summary(text).tables_optimized, 3);
    }

    #[test]
    fn test_extract_optimization_summary_table_line_does_not_set_space() {
        // table match takes precedence over the saved-space branch
        let summary = extract_optimization_summary("Optimized table wp_posts and saved 3 MB");
        assert_eq!(summary.tables_optimized, 1);
        assert_eq!(summary.space_saved, DEFAULT_SPACE_SAVED);
    }

    #[test]
    fn test_extract_optimization_summary_saved_requires_unit() {
        let summary = extract_optimization_summary("We saved a lot of space");
        assert_eq!(summary.space_saved, DEFAULT_SPACE_SAVED);
    }

    #[test]
    fn test_extract_optimization_summary_collects_recommendations() {
        let text = "Optimized 2 tables\nYou should schedule weekly cleanups.\n# Should not count";
        let summary = extract_optimization_summary(text);
        assert_eq!(
            summary.recommendations,
            vec!["You should schedule weekly cleanups."]
        );
    }

    #[test]
    fn test_optimization_summary_serializes_with_api_field_names() {
        let json = serde_json::to_value(OptimizationSummary::default())
            .expect("summary should serialize");
        assert_eq!(json["tables_optimized"], 0);
        assert_eq!(json["space_saved"], "0 MB");
        assert_eq!(json["performance_improvement"], "Unknown");
        assert!(json["recommendations"].as_array().is_some());
    }

    use proptest::prelude::*;

    proptest! {
        /// Property: performance_improvement is never derived from text
        #[test]
        fn prop_performance_improvement_stays_unknown(text in "\\PC{0,300}") {
            let summary = extract_optimization_summary(&text);
            prop_assert_eq!(summary.performance_improvement.as_str(), DEFAULT_PERFORMANCE_IMPROVEMENT);
            prop_assert_eq!(&summary, &extract_optimization_summary(&text));
        }
    }
}
