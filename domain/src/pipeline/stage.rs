//! Pipeline stages and the per-run state machine

use serde::{Deserialize, Serialize};

/// One discrete phase of the three-stage pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Search for and analyze trending topics in the field
    Trending,
    /// Grounded research on the leading topic
    Research,
    /// Draft post variations from the research report
    Generation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Trending => "trending",
            Stage::Research => "research",
            Stage::Generation => "generation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Trending => "Trend Discovery",
            Stage::Research => "Research",
            Stage::Generation => "Post Drafting",
        }
    }

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            Stage::Trending => 1,
            Stage::Research => 2,
            Stage::Generation => 3,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of a single generation run
///
/// ```text
/// Idle -> Running(Trending) -> Running(Research) -> Running(Generation) -> Complete
///   \________________________________________________________________/
///                               |
///                             Error
/// ```
///
/// Each run owns its own state value; nothing here is shared between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Running(Stage),
    Complete,
    Error,
}

impl PipelineState {
    /// The next state after the current one succeeds.
    ///
    /// Terminal states stay where they are.
    pub fn advance(self) -> PipelineState {
        match self {
            PipelineState::Idle => PipelineState::Running(Stage::Trending),
            PipelineState::Running(Stage::Trending) => PipelineState::Running(Stage::Research),
            PipelineState::Running(Stage::Research) => PipelineState::Running(Stage::Generation),
            PipelineState::Running(Stage::Generation) => PipelineState::Complete,
            terminal => terminal,
        }
    }

    /// Move to the absorbing error state. A completed run stays complete.
    pub fn fail(self) -> PipelineState {
        match self {
            PipelineState::Complete => PipelineState::Complete,
            _ => PipelineState::Error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Complete | PipelineState::Error)
    }

    /// The stage being executed, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Running(stage) => Some(*stage),
            _ => None,
        }
    }
}
