//! Response envelopes returned alongside the extracted digests

use serde::{Deserialize, Serialize};

use crate::extract::{
    extract_code_recommendations, extract_optimization_summary, extract_recommendations,
    CodeRecommendation, OptimizationSummary,
};

/// Status reported by every envelope built from an existing response
pub const STATUS_SUCCESS: &str = "success";

/// Security scan digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScanReport {
    /// Always "success"
    pub status: String,
    /// Human-readable summary line
    pub message: String,
    /// Raw response text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    /// Actionable lines from the response
    pub recommendations: Vec<String>,
}

impl SecurityScanReport {
    /// Message carried by every security scan envelope
    pub const MESSAGE: &'static str = "Security scan completed with AI analysis";

    /// Build the envelope from an AI response
    pub fn from_response(response: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Self::MESSAGE.to_string(),
            ai_analysis: Some(response.to_string()),
            recommendations: extract_recommendations(response),
        }
    }
}

/// Database optimization digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseReport {
    /// Always "success"
    pub status: String,
    /// Human-readable summary line
    pub message: String,
    /// Raw response text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    /// Counters and recommendations from the response
    pub optimization_summary: OptimizationSummary,
}

impl DatabaseReport {
    /// Message carried by every database optimization envelope
    pub const MESSAGE: &'static str = "Database optimization completed with AI guidance";

    /// Build the envelope from an AI response
    pub fn from_response(response: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Self::MESSAGE.to_string(),
            ai_analysis: Some(response.to_string()),
            optimization_summary: extract_optimization_summary(response),
        }
    }
}

/// Code validation digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeReviewReport {
    /// Always "success"
    pub status: String,
    /// Human-readable summary line
    pub message: String,
    /// Raw response text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    /// Heading-delimited review sections
    pub recommendations: Vec<CodeRecommendation>,
}

impl CodeReviewReport {
    /// Message carried by every code validation envelope
    pub const MESSAGE: &'static str = "Code validation completed with AI analysis";

    /// Build the envelope from an AI response
    pub fn from_response(response: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Self::MESSAGE.to_string(),
            ai_analysis: Some(response.to_string()),
            recommendations: extract_code_recommendations(response),
        }
    }
}
