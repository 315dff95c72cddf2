//! Line-oriented extraction of recommendations from AI responses
//!
//! Each extractor is a pure function over the raw response text. They never
//! fail: empty, whitespace-only or unmatched input yields the empty/default
//! result.
//!
//! # Examples
//!
//! ```
//! use wpai_digest::extract::{extract_code_recommendations, extract_recommendations};
//!
//! let recs = extract_recommendations("You should fix the validation logic here");
//! assert_eq!(recs, vec!["You should fix the validation logic here"]);
//!
//! let review = extract_code_recommendations("## Security\nUse nonces.\n## Performance\nCache queries.");
//! assert_eq!(review.len(), 2);
//! assert_eq!(review[0].title, "Security");
//! ```

pub mod code_review;
pub mod optimization;
pub mod recommendations;

pub use code_review::{extract_code_recommendations, CodeRecommendation};
pub use optimization::{extract_optimization_summary, OptimizationSummary};
pub use recommendations::extract_recommendations;

/// Maximum number of generic recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Maximum number of code review recommendations returned
pub const MAX_CODE_RECOMMENDATIONS: usize = 5;

/// Keywords that mark a line as actionable
pub const TRIGGER_KEYWORDS: [&str; 5] = ["recommend", "should", "must", "improve", "fix"];

/// Lines must be strictly longer than this (in characters) to count
pub const MIN_RECOMMENDATION_CHARS: usize = 10;
