//! Pipeline domain
//!
//! Stages, the per-run state machine, progress events and run outputs.

pub mod event;
pub mod result;
pub mod stage;

pub use event::{AgentEvent, CompletionData, StageData};
pub use result::{GenerationResult, ResearchReport};
pub use stage::{PipelineState, Stage};
