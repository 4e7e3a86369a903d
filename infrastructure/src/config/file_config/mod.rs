//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod prompts;
mod providers;

pub use output::FileOutputConfig;
pub use prompts::FilePromptsConfig;
pub use providers::{FileGeminiConfig, FileProvidersConfig};

use postcraft_domain::{
    AgentConfig, ConfigIssue, ConfigIssueCode, ModelSettings, PostSettings, SearchSettings,
    Severity,
};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and temperature
    pub model: ModelSettings,
    /// Search query templates
    pub search: SearchSettings,
    /// Post parsing parameters
    pub post: PostSettings,
    /// Prompt document location
    pub prompts: FilePromptsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Provider settings (credentials, endpoint, timeout)
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// The pipeline settings carried by this file
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            model: self.model.clone(),
            search: self.search.clone(),
            post: self.post.clone(),
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Pipeline settings are checked by [`AgentConfig::validate`]; provider
    /// settings are checked here.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.agent_config().validate();

        if self.providers.gemini.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout {
                    field: "providers.gemini.timeout_secs".to_string(),
                },
                message: "providers.gemini.timeout_secs must be greater than 0".to_string(),
            });
        }

        issues
    }
}
