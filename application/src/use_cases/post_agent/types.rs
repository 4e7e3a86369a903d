//! Type definitions for the PostAgent use case.

use crate::ports::llm_gateway::GatewayError;
use postcraft_domain::DomainError;
use thiserror::Error;

/// Errors that abort a pipeline run or a single-shot call
#[derive(Error, Debug)]
pub enum PostAgentError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A streamed run ended with an `Error` event carrying this message
    #[error("{0}")]
    Pipeline(String),
}

impl PostAgentError {
    /// Check if this error is the missing-credential short circuit
    pub fn is_not_configured(&self) -> bool {
        matches!(self, PostAgentError::Domain(DomainError::NotConfigured))
    }
}

/// Input for a generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratePostsInput {
    /// Professional field, e.g. "Healthcare"
    pub field: String,
    /// Free text prepended to the search findings in the trending and research prompts
    pub additional_context: String,
}

impl GeneratePostsInput {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            additional_context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = context.into();
        self
    }
}
