//! Post Agent use case
//!
//! Drives the three-stage pipeline and reports progress as [`AgentEvent`]s:
//!
//! | Stage          | Search calls            | Model calls | Result data          |
//! |----------------|-------------------------|-------------|----------------------|
//! | 1. Trending    | 1                       | 1           | `topics`             |
//! | 2. Research    | N, concurrent, joined   | 1           | `report`             |
//! | 3. Generation  | 0                       | 1           | `posts`, `raw_posts` |
//!
//! Every stage output is a local of the running stream and is handed to the
//! next stage explicitly, so one `PostAgent` can serve any number of
//! concurrent runs. A failure anywhere ends the stream with exactly one
//! `Error` event; search failures never do (see [`SearchClient`]).

mod generation;
mod refine;
mod research;
mod trending;
mod types;

pub use refine::REFINE_NOT_CONFIGURED;
pub use trending::TRENDING_NOT_CONFIGURED;
pub use types::{GeneratePostsInput, PostAgentError};

use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::prompt_store::PromptStorePort;
use crate::ports::search_gateway::SearchGateway;
use crate::search_client::SearchClient;
use async_stream::try_stream;
use chrono::Utc;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use postcraft_domain::{
    AgentConfig, AgentEvent, DomainError, Field, GenerationResult, PipelineState, PostParser,
    RenderedPrompt, Stage, StageData,
};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, error, info};

type PipelineStream = Pin<Box<dyn Stream<Item = Result<AgentEvent, PostAgentError>> + Send>>;

/// Use case for generating and refining LinkedIn posts
#[derive(Clone)]
pub struct PostAgent {
    llm: Option<Arc<dyn LlmGateway>>,
    search: SearchClient,
    prompts: Arc<dyn PromptStorePort>,
    parser: Arc<PostParser>,
    config: Arc<AgentConfig>,
}

impl PostAgent {
    /// An agent without a language model. Every operation short-circuits
    /// until [`with_llm`](Self::with_llm) is applied.
    pub fn new(
        config: Arc<AgentConfig>,
        prompts: Arc<dyn PromptStorePort>,
        parser: Arc<PostParser>,
    ) -> Self {
        Self {
            llm: None,
            search: SearchClient::unconfigured(config.search.clone()),
            prompts,
            parser,
            config,
        }
    }

    pub fn with_llm(mut self, llm: Arc<dyn LlmGateway>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn with_search(mut self, gateway: Arc<dyn SearchGateway>) -> Self {
        self.search = SearchClient::new(
            gateway,
            self.config.model.search_model.clone(),
            self.config.search.clone(),
        );
        self
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Run the full pipeline, streaming events as they happen.
    ///
    /// The stream always ends with either `Complete` or a single `Error`.
    /// Without a configured model it yields one `Error` and calls nothing.
    pub fn generate_posts_stream(&self, input: GeneratePostsInput) -> BoxStream<'static, AgentEvent> {
        let Some(llm) = self.llm.clone() else {
            error!("Post generation requested without an API key");
            return stream::iter([AgentEvent::error(DomainError::NotConfigured.to_string())]).boxed();
        };

        let mut state = PipelineState::Idle;
        self.clone()
            .run_pipeline(llm, input)
            .map(move |item| match item {
                Ok(event) => {
                    state = next_state(state, &event);
                    event
                }
                Err(e) => {
                    error!(stage = ?state.stage(), error = %e, "Post generation failed");
                    state = state.fail();
                    AgentEvent::error(format!("An error occurred: {}", e))
                }
            })
            .boxed()
    }

    /// Run the full pipeline and collect its outputs.
    pub async fn generate_posts(
        &self,
        input: GeneratePostsInput,
    ) -> Result<GenerationResult, PostAgentError> {
        if !self.is_configured() {
            return Err(DomainError::NotConfigured.into());
        }

        let field = input.field.trim().to_string();
        let mut events = self.generate_posts_stream(input);
        let mut trending_topics = String::new();
        let mut research_report = String::new();
        let mut generated = None;

        while let Some(event) = events.next().await {
            match event {
                AgentEvent::Result { data, .. } => match data {
                    StageData::Topics { topics } => trending_topics = topics,
                    StageData::Report { report } => research_report = report,
                    StageData::Posts { posts, raw_posts } => generated = Some((posts, raw_posts)),
                },
                AgentEvent::Complete { .. } => {
                    let (posts, raw_posts) = generated.take().unwrap_or_default();
                    return Ok(GenerationResult {
                        field,
                        trending_topics,
                        research_report,
                        posts,
                        raw_posts,
                        generated_at: Utc::now(),
                    });
                }
                AgentEvent::Error { message } => return Err(PostAgentError::Pipeline(message)),
                AgentEvent::Stage { .. } | AgentEvent::Progress { .. } => {}
            }
        }

        Err(PostAgentError::Pipeline(
            "Pipeline ended without completing".to_string(),
        ))
    }

    fn run_pipeline(self, llm: Arc<dyn LlmGateway>, input: GeneratePostsInput) -> PipelineStream {
        Box::pin(try_stream! {
            let field = Field::new(input.field).map_err(PostAgentError::from)?;
            let context = input.additional_context;
            info!(field = %field, "Starting post generation");

            // Stage 1: trending topics
            yield AgentEvent::stage(Stage::Trending);
            let query = self
                .config
                .search
                .trending_query(&field)
                .map_err(PostAgentError::from)?;
            yield AgentEvent::progress(format!("Searching for: {}", query));

            let findings = self.search.search(&query).await;
            yield AgentEvent::progress("Analyzing search results...");

            let trend_context = format!("{}\n\nRecent findings:\n{}", context, findings);
            let topics = self.analyze_trends(&llm, &field, &trend_context).await?;
            yield AgentEvent::result(StageData::Topics {
                topics: topics.clone(),
            });

            // Stage 2: research
            yield AgentEvent::stage(Stage::Research);
            let queries = self
                .config
                .search
                .research_queries_for(&field)
                .map_err(PostAgentError::from)?;
            for (i, query) in queries.iter().enumerate() {
                yield AgentEvent::progress(format!(
                    "Research query {}/{}: {}",
                    i + 1,
                    queries.len(),
                    query
                ));
            }

            let findings = self.gather_findings(&queries).await;
            yield AgentEvent::progress("Compiling research report...");

            let research_context = format!(
                "{}\n\nResearch findings:\n{}",
                context,
                findings.join("\n\n")
            );
            let report = self
                .compile_report(&llm, &field, &topics, &research_context, queries)
                .await?;
            yield AgentEvent::result(StageData::Report {
                report: report.content.clone(),
            });

            // Stage 3: drafting
            yield AgentEvent::stage(Stage::Generation);
            yield AgentEvent::progress(format!(
                "Generating {} unique post variations...",
                self.config.post.max_posts
            ));

            let drafts = self.draft_posts(&llm, &field, &report.content).await?;
            yield AgentEvent::result(drafts);

            yield AgentEvent::complete();
        })
    }

    fn render(
        &self,
        name: &str,
        vars: &[(&str, &str)],
    ) -> Result<RenderedPrompt, PostAgentError> {
        let template = self.prompts.get_template(name)?;
        debug!(prompt = name, "Rendering prompt");
        Ok(template.render(vars)?)
    }

    async fn complete(
        &self,
        llm: &Arc<dyn LlmGateway>,
        prompt: RenderedPrompt,
    ) -> Result<String, PostAgentError> {
        let request = CompletionRequest::new(
            self.config.model.llm_model.clone(),
            self.config.model.llm_temperature,
            prompt,
        );
        Ok(llm.complete(&request).await?)
    }
}

/// Advance the run state on stage boundaries and completion
fn next_state(state: PipelineState, event: &AgentEvent) -> PipelineState {
    match event {
        AgentEvent::Stage { .. } | AgentEvent::Complete { .. } => {
            let next = state.advance();
            debug!(from = ?state, to = ?next, "Pipeline state");
            next
        }
        _ => state,
    }
}
