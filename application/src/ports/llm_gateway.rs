//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted language model.

use async_trait::async_trait;
use postcraft_domain::{Model, RenderedPrompt};
use thiserror::Error;

/// Errors that can occur during model or search calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A single-shot completion request: one rendered prompt, one model
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub temperature: f32,
    pub system: String,
    pub human: String,
}

impl CompletionRequest {
    pub fn new(model: Model, temperature: f32, prompt: RenderedPrompt) -> Self {
        Self {
            model,
            temperature,
            system: prompt.system,
            human: prompt.human,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the prompt and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
