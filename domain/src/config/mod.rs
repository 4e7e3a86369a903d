//! Configuration value objects for the domain layer
//!
//! [`AgentConfig`] groups everything the pipeline reads at run time:
//! model selection, search query templates and post parsing limits.
//! It is built once (defaults or from the config file) and shared
//! read-only between runs.

mod agent_config;
mod output_format;
pub mod validation;

pub use agent_config::{AgentConfig, ModelSettings, PostSettings, SearchSettings};
pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
