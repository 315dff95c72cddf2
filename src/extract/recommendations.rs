//! Generic recommendation extraction

use super::{MAX_RECOMMENDATIONS, MIN_RECOMMENDATION_CHARS, TRIGGER_KEYWORDS};

/// Extract actionable recommendation lines from an AI response
///
/// A trimmed line qualifies when it mentions one of the trigger keywords
/// (case-insensitive), is longer than 10 characters and is not a Markdown
/// heading. Order of appearance is kept, duplicates are kept, and at most
/// 10 lines are returned.
///
/// # Examples
///
/// ```
/// use wpai_digest::extract::extract_recommendations;
///
/// let text = "# Recommendations\n\
///             ### You should improve caching\n\
///             You must update WordPress core.\n\
///             Looks fine.";
///
/// assert_eq!(extract_recommendations(text), vec!["You must update WordPress core."]);
/// assert!(extract_recommendations("").is_empty());
/// ```
pub fn extract_recommendations(text: &str) -> Vec<String> {
    let recommendations: Vec<String> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| is_recommendation(line))
        .take(MAX_RECOMMENDATIONS)
        .map(String::from)
        .collect();

    log::debug!("extracted {} recommendation line(s)", recommendations.len());
    recommendations
}

/// Check whether an already-trimmed line qualifies as a recommendation
pub(crate) fn is_recommendation(line: &str) -> bool {
    let lower = line.to_lowercase();
    TRIGGER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        && line.chars().count() > MIN_RECOMMENDATION_CHARS
        && !line.starts_with('#')
}
