//! Prompt source configuration from TOML (`[prompts]` section)

use crate::prompts::PromptSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// YAML prompt document; the built-in prompts are used when unset
    pub file: Option<PathBuf>,
}

impl FilePromptsConfig {
    /// Where the prompt store should read from
    pub fn source(&self) -> PromptSource {
        match &self.file {
            Some(path) => PromptSource::File(path.clone()),
            None => PromptSource::Embedded,
        }
    }
}
