//! Research stage: concurrent grounded searches, then one report.

use super::PostAgent;
use super::types::PostAgentError;
use crate::ports::llm_gateway::LlmGateway;
use futures::future::join_all;
use postcraft_domain::core::string::first_line;
use postcraft_domain::prompt::names;
use postcraft_domain::{Field, ResearchReport};
use std::sync::Arc;
use tracing::debug;

impl PostAgent {
    /// Search every query concurrently and wait for all of them.
    ///
    /// Results are in query order regardless of completion order. Dropping
    /// the returned future drops every in-flight search with it.
    pub(super) async fn gather_findings(&self, queries: &[String]) -> Vec<String> {
        debug!(queries = queries.len(), "Research fan-out");
        join_all(queries.iter().map(|query| self.search.search(query))).await
    }

    pub(super) async fn compile_report(
        &self,
        llm: &Arc<dyn LlmGateway>,
        field: &Field,
        topics: &str,
        context: &str,
        sources: Vec<String>,
    ) -> Result<ResearchReport, PostAgentError> {
        let topic = focal_topic(topics, field);
        debug!(topic = %topic, "Compiling research report");

        let prompt = self.render(
            names::RESEARCH_REPORT,
            &[("topic", topic), ("field", field.as_str()), ("context", context)],
        )?;
        let content = self.complete(llm, prompt).await?;

        Ok(ResearchReport {
            topic: topic.to_string(),
            field: field.to_string(),
            content,
            sources,
        })
    }
}

/// First line of the trending output, or the field when that line is blank
pub(super) fn focal_topic<'a>(topics: &'a str, field: &'a Field) -> &'a str {
    first_line(topics).unwrap_or(field.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_topic_takes_first_line() {
        let field = Field::new("Healthcare").unwrap();
        let topics = "1. **AI scribes** cut charting time\n2. Value-based care";
        assert_eq!(focal_topic(topics, &field), "1. **AI scribes** cut charting time");
    }

    #[test]
    fn test_focal_topic_falls_back_to_field() {
        let field = Field::new("Healthcare").unwrap();
        assert_eq!(focal_topic("", &field), "Healthcare");
        assert_eq!(focal_topic("   \nsecond line", &field), "Healthcare");
    }
}
