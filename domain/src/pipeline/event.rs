//! Events emitted while a generation run progresses.
//!
//! [`AgentEvent`] is a closed sum type; its serde form is the wire
//! message a transport forwards verbatim:
//!
//! | `type`     | `message` | `stage` | `data` |
//! |------------|:---------:|:-------:|:------:|
//! | `stage`    | yes       | yes     |        |
//! | `progress` | yes       |         |        |
//! | `result`   | yes       | yes     | yes    |
//! | `complete` | yes       |         | `{}`   |
//! | `error`    | yes       |         |        |

use super::stage::Stage;
use crate::post::ParsedPost;
use serde::{Deserialize, Serialize};

/// Payload of a stage `result` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageData {
    Posts {
        posts: Vec<ParsedPost>,
        raw_posts: String,
    },
    Report {
        report: String,
    },
    Topics {
        topics: String,
    },
}

impl StageData {
    /// The stage this payload belongs to
    pub fn stage(&self) -> Stage {
        match self {
            StageData::Topics { .. } => Stage::Trending,
            StageData::Report { .. } => Stage::Research,
            StageData::Posts { .. } => Stage::Generation,
        }
    }
}

/// Payload of the `complete` event.
///
/// Always empty: stage payloads were already delivered in `result` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionData {}

/// Event emitted during a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AgentEvent {
    /// A stage has started
    Stage { stage: Stage, message: String },
    /// Intermediate progress inside a stage
    Progress { message: String },
    /// A stage finished with its output
    Result {
        stage: Stage,
        message: String,
        data: StageData,
    },
    /// The whole run finished
    Complete {
        message: String,
        data: CompletionData,
    },
    /// The run aborted
    Error { message: String },
}

impl AgentEvent {
    pub fn stage(stage: Stage) -> Self {
        let message = match stage {
            Stage::Trending => "🔍 Identifying trending topics in your field...",
            Stage::Research => "📚 Conducting deep research on trending topics...",
            Stage::Generation => "✍️ Crafting LinkedIn post options...",
        };
        AgentEvent::Stage {
            stage,
            message: message.to_string(),
        }
    }

    pub fn progress(message: impl Into<String>) -> Self {
        AgentEvent::Progress {
            message: message.into(),
        }
    }

    /// Result event; the stage is taken from the payload so the two can't disagree
    pub fn result(data: StageData) -> Self {
        let stage = data.stage();
        let message = match stage {
            Stage::Trending => "✅ Trending topics identified!",
            Stage::Research => "✅ Research report compiled!",
            Stage::Generation => "✅ LinkedIn posts generated!",
        };
        AgentEvent::Result {
            stage,
            message: message.to_string(),
            data,
        }
    }

    pub fn complete() -> Self {
        AgentEvent::Complete {
            message: "🎉 All done! Review your posts below.".to_string(),
            data: CompletionData::default(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        AgentEvent::Error {
            message: message.into(),
        }
    }

    /// The wire `type` tag
    pub fn event_type(&self) -> &'static str {
        match self {
            AgentEvent::Stage { .. } => "stage",
            AgentEvent::Progress { .. } => "progress",
            AgentEvent::Result { .. } => "result",
            AgentEvent::Complete { .. } => "complete",
            AgentEvent::Error { .. } => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AgentEvent::Stage { message, .. }
            | AgentEvent::Progress { message }
            | AgentEvent::Result { message, .. }
            | AgentEvent::Complete { message, .. }
            | AgentEvent::Error { message } => message,
        }
    }

    /// Returns true if no further events follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentEvent::Complete { .. } | AgentEvent::Error { .. })
    }
}
