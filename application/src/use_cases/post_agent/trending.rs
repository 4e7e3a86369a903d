//! Trending stage, also exposed as a standalone query.

use super::PostAgent;
use super::types::PostAgentError;
use crate::ports::llm_gateway::LlmGateway;
use postcraft_domain::Field;
use postcraft_domain::prompt::names;
use std::sync::Arc;
use tracing::info;

/// Returned by [`PostAgent::get_trending_topics`] when no credential is configured
pub const TRENDING_NOT_CONFIGURED: &str = "Configure GOOGLE_API_KEY to get trending topics";

impl PostAgent {
    /// Trending topics for `field` without running research or drafting.
    pub async fn get_trending_topics(&self, field: &str) -> Result<String, PostAgentError> {
        let Some(llm) = &self.llm else {
            return Ok(TRENDING_NOT_CONFIGURED.to_string());
        };

        let field = Field::new(field)?;
        let query = self.config.search.trending_query(&field)?;
        info!(field = %field, query = %query, "Fetching trending topics");

        let findings = self.search.search(&query).await;
        let context = format!("Recent search findings:\n{}", findings);
        self.analyze_trends(llm, &field, &context).await
    }

    pub(super) async fn analyze_trends(
        &self,
        llm: &Arc<dyn LlmGateway>,
        field: &Field,
        context: &str,
    ) -> Result<String, PostAgentError> {
        let prompt = self.render(
            names::TRENDING_TOPICS,
            &[("field", field.as_str()), ("context", context)],
        )?;
        self.complete(llm, prompt).await
    }
}
