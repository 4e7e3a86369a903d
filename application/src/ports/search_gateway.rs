//! Search Gateway port
//!
//! A model call with web-search grounding enabled. Failures are returned
//! as [`GatewayError`]; turning them into advisory text is the job of
//! [`SearchClient`](crate::search_client::SearchClient).

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use postcraft_domain::Model;

#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Ask `model` to search the web for `instruction` and summarize
    async fn grounded_search(&self, model: &Model, instruction: &str)
    -> Result<String, GatewayError>;
}
