//! Application layer for postcraft
//!
//! This crate contains the pipeline use case, the search client and port
//! definitions. It depends only on the domain layer.

pub mod ports;
pub mod search_client;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    prompt_store::PromptStorePort,
    search_gateway::SearchGateway,
};
pub use search_client::SearchClient;
pub use use_cases::post_agent::{
    GeneratePostsInput, PostAgent, PostAgentError, REFINE_NOT_CONFIGURED, TRENDING_NOT_CONFIGURED,
};
