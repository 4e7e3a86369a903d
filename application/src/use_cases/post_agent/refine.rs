//! Post refinement, independent of the pipeline.

use super::PostAgent;
use super::types::PostAgentError;
use postcraft_domain::core::string::truncate;
use postcraft_domain::prompt::names;
use tracing::info;

/// Returned by [`PostAgent::refine_post`] when no credential is configured
pub const REFINE_NOT_CONFIGURED: &str = "Configure GOOGLE_API_KEY to refine posts";

impl PostAgent {
    /// Rewrite `content` according to `feedback`.
    ///
    /// One model call; the reply is returned verbatim, without parsing.
    pub async fn refine_post(&self, content: &str, feedback: &str) -> Result<String, PostAgentError> {
        let Some(llm) = &self.llm else {
            return Ok(REFINE_NOT_CONFIGURED.to_string());
        };

        info!(feedback = %truncate(feedback, 80), "Refining post");
        let prompt = self.render(names::REFINEMENT, &[("post", content), ("feedback", feedback)])?;
        self.complete(llm, prompt).await
    }
}
