//! Heading-delimited code review extraction

use serde::{Deserialize, Serialize};

use super::MAX_CODE_RECOMMENDATIONS;

/// A titled section of a code review response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecommendation {
    /// Heading text with the `#` markers removed
    pub title: String,
    /// Body lines joined by single spaces; absent when the heading had no body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CodeRecommendation {
    fn from_heading(line: &str) -> Self {
        Self {
            title: line.replace('#', "").trim().to_string(),
            description: None,
        }
    }

    fn push_line(&mut self, line: &str) {
        match &mut self.description {
            Some(description) => {
                description.push(' ');
                description.push_str(line);
            }
            None => self.description = Some(line.to_string()),
        }
    }
}

/// Group a code review response into titled recommendations
///
/// A trimmed line starting with `##` (or `###`) opens a new section. Non-empty
/// lines after it form the description. Prose before the first section
/// heading is dropped, and a single `#` heading does not open a section. At
/// most 5 sections are returned.
///
/// # Examples
///
/// ```
/// use wpai_digest::extract::extract_code_recommendations;
///
/// let recs = extract_code_recommendations(
///     "## Security\nUse nonces.\nSanitize input.\n## Performance\nCache queries.",
/// );
///
/// assert_eq!(recs.len(), 2);
/// assert_eq!(recs[0].title, "Security");
/// assert_eq!(recs[0].description.as_deref(), Some("Use nonces. Sanitize input."));
/// assert_eq!(recs[1].description.as_deref(), Some("Cache queries."));
/// ```
pub fn extract_code_recommendations(text: &str) -> Vec<CodeRecommendation> {
    let mut recommendations = Vec::new();
    let mut current: Option<CodeRecommendation> = None;

    for line in text.split('\n').map(str::trim) {
        if line.starts_with("##") {
            if let Some(done) = current.take() {
                recommendations.push(done);
            }
            current = Some(CodeRecommendation::from_heading(line));
        } else if let Some(open) = current.as_mut() {
            if !line.is_empty() {
                open.push_line(line);
            }
        }
    }

    if let Some(done) = current {
        recommendations.push(done);
    }

    log::debug!("found {} code review section(s)", recommendations.len());
    recommendations.truncate(MAX_CODE_RECOMMENDATIONS);
    recommendations
}
