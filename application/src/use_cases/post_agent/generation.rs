//! Generation stage: draft posts from the report and split them.

use super::PostAgent;
use super::types::PostAgentError;
use crate::ports::llm_gateway::LlmGateway;
use postcraft_domain::prompt::names;
use postcraft_domain::{Field, StageData};
use std::sync::Arc;
use tracing::{info, warn};

impl PostAgent {
    pub(super) async fn draft_posts(
        &self,
        llm: &Arc<dyn LlmGateway>,
        field: &Field,
        report: &str,
    ) -> Result<StageData, PostAgentError> {
        let prompt = self.render(
            names::POST_GENERATION,
            &[("report", report), ("field", field.as_str())],
        )?;
        let raw_posts = self.complete(llm, prompt).await?;

        let outcome = self.parser.parse_with_outcome(&raw_posts);
        if outcome.fallback {
            warn!("No post markers found in generated text; keeping it as a single post");
        }
        info!(posts = outcome.posts.len(), "Parsed generated posts");

        Ok(StageData::Posts {
            posts: outcome.posts,
            raw_posts,
        })
    }
}
