//! Prompt document loading
//!
//! [`YamlPromptStore`] implements [`PromptStorePort`](postcraft_application::PromptStorePort)
//! over a YAML document, either the defaults compiled into the binary or a
//! file on disk.

mod yaml_store;

pub use yaml_store::{EMBEDDED_PROMPTS, PromptSource, YamlPromptStore, parse_document};
