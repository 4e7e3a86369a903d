//! Gemini REST client implementing the model and search gateways

use super::types::{
    GenerateContentRequest, completion_body, parse_response, search_body, status_error,
    transport_error,
};
use async_trait::async_trait;
use postcraft_application::{CompletionRequest, GatewayError, LlmGateway, SearchGateway};
use postcraft_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

impl GeminiClient {
    /// Create a client with a per-request timeout
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::Unauthorized("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `{base_url}/models/{model}:generateContent`
    pub fn endpoint(&self, model: &Model) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn generate(
        &self,
        model: &Model,
        body: &GenerateContentRequest,
    ) -> Result<String, GatewayError> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| transport_error(&e))?;
        debug!(status = %status, bytes = text.len(), "Gemini API response");

        if !status.is_success() {
            let err = status_error(status, &text);
            error!(model = %model, error = %err, "Gemini API error");
            return Err(err);
        }

        parse_response(&text)
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.generate(&request.model, &completion_body(request)).await
    }
}

#[async_trait]
impl SearchGateway for GeminiClient {
    async fn grounded_search(
        &self,
        model: &Model,
        instruction: &str,
    ) -> Result<String, GatewayError> {
        self.generate(model, &search_body(instruction)).await
    }
}
