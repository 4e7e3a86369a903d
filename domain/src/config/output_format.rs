//! Output format value object

use serde::{Deserialize, Serialize};

/// How a generation run is rendered to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One wire message per event, newline-delimited JSON
    Jsonl,
    /// Progress spinner followed by the formatted posts (default)
    #[default]
    Pretty,
    /// A single JSON document with the collected result
    Json,
}
