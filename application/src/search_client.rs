//! Search Client
//!
//! Wraps [`SearchGateway`] with a text-only contract: `search` always
//! returns a string. Search results are advisory context for the model, so
//! a failed search degrades into a placeholder sentence instead of an
//! error.

use crate::ports::search_gateway::SearchGateway;
use postcraft_domain::core::string::truncate;
use postcraft_domain::{Model, SearchSettings};
use std::sync::Arc;
use tracing::{debug, warn};

/// Returned without calling out when no credential is configured
pub const NOT_CONFIGURED: &str = "API key not configured. Unable to perform web search.";

#[derive(Clone)]
pub struct SearchClient {
    gateway: Option<Arc<dyn SearchGateway>>,
    model: Model,
    settings: SearchSettings,
}

impl SearchClient {
    pub fn new(gateway: Arc<dyn SearchGateway>, model: Model, settings: SearchSettings) -> Self {
        Self {
            gateway: Some(gateway),
            model,
            settings,
        }
    }

    /// A client that answers every query with [`NOT_CONFIGURED`]
    pub fn unconfigured(settings: SearchSettings) -> Self {
        Self {
            gateway: None,
            model: Model::default_search(),
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_some()
    }

    /// Run a grounded search for `query`. Never fails.
    pub async fn search(&self, query: &str) -> String {
        let Some(gateway) = &self.gateway else {
            return NOT_CONFIGURED.to_string();
        };

        let instruction = match self.settings.instruction_for(query) {
            Ok(instruction) => instruction,
            Err(e) => return degraded(query, &e),
        };

        debug!(query = %truncate(query, 80), model = %self.model, "Grounded search");
        match gateway.grounded_search(&self.model, &instruction).await {
            Ok(text) => text,
            Err(e) => degraded(query, &e),
        }
    }
}

fn degraded(query: &str, error: &dyn std::error::Error) -> String {
    warn!(query = %truncate(query, 80), error = %error, "Search degraded to placeholder text");
    format!("Search completed with limited results: {}", error)
}
