//! Infrastructure layer for postcraft
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: layered configuration file loading, the
//! YAML prompt store and the Gemini REST client.

pub mod config;
pub mod prompts;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGeminiConfig, FileOutputConfig, FilePromptsConfig,
    FileProvidersConfig,
};
pub use prompts::{PromptSource, YamlPromptStore};
pub use providers::GeminiClient;
