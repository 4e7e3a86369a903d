//! Domain layer for postcraft
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pipeline
//!
//! A run takes a professional field and moves through three stages:
//!
//! - **Trending**: find what the field is talking about right now
//! - **Research**: compile a report on the leading topic
//! - **Generation**: draft several post variations from the report
//!
//! Progress is reported as a sequence of [`AgentEvent`]s.
//!
//! ## Posts
//!
//! [`PostParser`] splits the model's draft into [`ParsedPost`]s using the
//! delimiter settings in [`PostSettings`].

pub mod config;
pub mod core;
pub mod pipeline;
pub mod post;
pub mod prompt;

// Re-export commonly used types
pub use config::{
    AgentConfig, ConfigIssue, ConfigIssueCode, ModelSettings, OutputFormat, PostSettings,
    SearchSettings, Severity,
};
pub use core::{error::DomainError, field::Field, model::Model};
pub use pipeline::{
    AgentEvent, CompletionData, GenerationResult, PipelineState, ResearchReport, Stage, StageData,
};
pub use post::{FALLBACK_STYLE, ParseOutcome, ParsedPost, PostParser};
pub use prompt::{PromptDefinition, PromptDocument, PromptTemplate, RenderedPrompt};
