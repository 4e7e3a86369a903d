//! Outputs of a generation run

use crate::post::ParsedPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Research report compiled by the research stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchReport {
    /// The focal subtopic researched
    pub topic: String,
    /// The professional field context
    pub field: String,
    /// Full report text
    pub content: String,
    /// Search queries the report was grounded on
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Complete result of a post generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub field: String,
    pub trending_topics: String,
    pub research_report: String,
    pub posts: Vec<ParsedPost>,
    /// Model output before parsing
    pub raw_posts: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sources_default_empty() {
        let report: ResearchReport = serde_json::from_str(
            r#"{"topic": "AI scribes", "field": "Healthcare", "content": "..."}"#,
        )
        .unwrap();
        assert!(report.sources.is_empty());
    }
}
