//! Agent configuration (Value Objects)

use crate::core::error::DomainError;
use crate::core::field::Field;
use crate::core::model::Model;
use crate::prompt::render_text;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Model selection for the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model for trend analysis, research, drafting and refinement
    pub llm_model: Model,
    pub llm_temperature: f32,
    /// Model used for search-grounded queries
    pub search_model: Model,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            llm_model: Model::default_llm(),
            llm_temperature: 0.7,
            search_model: Model::default_search(),
        }
    }
}

/// Search query templates
///
/// Every template may reference `{field}`; `search_instruction` wraps the
/// final query and references `{query}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub trending_query_template: String,
    pub research_queries: Vec<String>,
    pub search_instruction: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            trending_query_template: "trending topics {field} 2024 2025 latest news developments"
                .to_string(),
            research_queries: vec![
                "{field} industry trends statistics 2024 2025".to_string(),
                "{field} expert opinions thought leadership".to_string(),
                "{field} case studies success stories".to_string(),
            ],
            search_instruction: "Search for the latest information about: {query}. \
                 Provide concise, factual information with recent developments."
                .to_string(),
        }
    }
}

impl SearchSettings {
    /// Query used by the trending stage
    pub fn trending_query(&self, field: &Field) -> Result<String, DomainError> {
        render_text(
            "search.trending_query_template",
            &self.trending_query_template,
            &[("field", field.as_str())],
        )
    }

    /// Research queries in declaration order
    pub fn research_queries_for(&self, field: &Field) -> Result<Vec<String>, DomainError> {
        self.research_queries
            .iter()
            .enumerate()
            .map(|(i, template)| {
                render_text(
                    &format!("search.research_queries[{}]", i),
                    template,
                    &[("field", field.as_str())],
                )
            })
            .collect()
    }

    /// Full instruction sent to the grounded search model
    pub fn instruction_for(&self, query: &str) -> Result<String, DomainError> {
        render_text(
            "search.search_instruction",
            &self.search_instruction,
            &[("query", query)],
        )
    }
}

/// Post parsing and validation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSettings {
    /// Literal banners the generation prompt asks the model to emit
    pub post_markers: Vec<String>,
    /// Style labels, aligned positionally with `post_markers`
    pub post_styles: Vec<String>,
    /// Case-insensitive delimiter used to split generated text
    pub post_split_pattern: String,
    /// Minimum trimmed length (characters) for a segment to count as a post
    pub min_post_length: usize,
    pub max_posts: usize,
    pub min_word_count: usize,
    pub max_word_count: usize,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            post_markers: vec![
                "--- POST 1 ---".to_string(),
                "--- POST 2 ---".to_string(),
                "--- POST 3 ---".to_string(),
            ],
            post_styles: vec![
                "Storytelling".to_string(),
                "Data-Driven".to_string(),
                "Thought Leadership".to_string(),
            ],
            post_split_pattern: r"(?:---\s*POST\s*\d+\s*---|Post\s*\d+[:\-]|#\s*Post\s*\d+)"
                .to_string(),
            min_post_length: 50,
            max_posts: 3,
            min_word_count: 150,
            max_word_count: 300,
        }
    }
}

impl PostSettings {
    /// Compile `post_split_pattern` case-insensitively
    pub fn compile_pattern(&self) -> Result<Regex, DomainError> {
        RegexBuilder::new(&self.post_split_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern(e.to_string()))
    }

    /// Markers the split pattern does not recognize
    pub fn unmatched_markers(&self) -> Result<Vec<&str>, DomainError> {
        let pattern = self.compile_pattern()?;
        Ok(self
            .post_markers
            .iter()
            .map(String::as_str)
            .filter(|marker| !pattern.is_match(marker))
            .collect())
    }
}

/// Main configuration container for the agent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub model: ModelSettings,
    pub search: SearchSettings,
    pub post: PostSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Field {
        Field::new(name).unwrap()
    }

    #[test]
    fn test_defaults_match_pipeline_expectations() {
        let config = AgentConfig::default();
        assert_eq!(config.model.llm_model, Model::Gemini25Flash);
        assert_eq!(config.model.search_model, Model::Gemini20Flash);
        assert_eq!(config.search.research_queries.len(), 3);
        assert_eq!(config.post.max_posts, 3);
        assert_eq!(config.post.min_post_length, 50);
        assert_eq!(config.post.post_styles.len(), config.post.post_markers.len());
    }

    #[test]
    fn test_trending_query_substitutes_field() {
        let search = SearchSettings::default();
        let query = search.trending_query(&field("Healthcare")).unwrap();
        assert_eq!(
            query,
            "trending topics Healthcare 2024 2025 latest news developments"
        );
    }

    #[test]
    fn test_research_queries_keep_declaration_order() {
        let search = SearchSettings::default();
        let queries = search.research_queries_for(&field("Fintech")).unwrap();
        assert_eq!(
            queries,
            vec![
                "Fintech industry trends statistics 2024 2025",
                "Fintech expert opinions thought leadership",
                "Fintech case studies success stories",
            ]
        );
    }

    #[test]
    fn test_unknown_placeholder_in_query_fails() {
        let search = SearchSettings {
            research_queries: vec!["{field} in {region}".to_string()],
            ..Default::default()
        };
        let err = search.research_queries_for(&field("Retail")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MissingPlaceholder { ref key, .. } if key == "region"
        ));
    }

    #[test]
    fn test_instruction_wraps_query() {
        let search = SearchSettings::default();
        let text = search.instruction_for("AI in logistics").unwrap();
        assert!(text.starts_with("Search for the latest information about: AI in logistics."));
    }

    #[test]
    fn test_default_markers_all_match_pattern() {
        let post = PostSettings::default();
        assert!(post.unmatched_markers().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let post = PostSettings {
            post_split_pattern: "(unclosed".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            post.compile_pattern(),
            Err(DomainError::InvalidPattern(_))
        ));
    }
}
