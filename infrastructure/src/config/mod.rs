//! Configuration file loading for postcraft
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POSTCRAFT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./postcraft.toml` or `./.postcraft.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/postcraft/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileOutputConfig, FilePromptsConfig, FileProvidersConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
