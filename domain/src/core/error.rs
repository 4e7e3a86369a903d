//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("GOOGLE_API_KEY not configured. Please set the environment variable.")]
    NotConfigured,

    #[error("Prompt '{name}' not found. Available prompts: {available:?}")]
    PromptNotFound { name: String, available: Vec<String> },

    #[error("Prompts file not found: {0}")]
    SourceNotFound(String),

    #[error("Malformed prompt source: {0}")]
    MalformedSource(String),

    #[error("Template '{template}' has no value for placeholder '{key}'")]
    MissingPlaceholder { template: String, key: String },

    #[error("Invalid post split pattern: {0}")]
    InvalidPattern(String),

    #[error("Field cannot be empty")]
    EmptyField,
}

impl DomainError {
    /// Check if this error means a requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::PromptNotFound { .. } | DomainError::SourceNotFound(_)
        )
    }
}
