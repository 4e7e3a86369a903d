//! Prompt domain
//!
//! Named system/human prompt pairs and strict `{placeholder}` rendering.
//! Loading prompt documents from disk is an infrastructure concern; this
//! module only knows their shape.

mod render;
mod template;

pub use render::{placeholders, render_text};
pub use template::{PromptDefinition, PromptDocument, PromptTemplate, RenderedPrompt};

/// Prompt names the pipeline depends on
pub mod names {
    pub const TRENDING_TOPICS: &str = "trending_topics";
    pub const RESEARCH_REPORT: &str = "research_report";
    pub const POST_GENERATION: &str = "post_generation";
    pub const REFINEMENT: &str = "refinement";

    /// All prompts a prompt document must define
    pub const REQUIRED: [&str; 4] = [TRENDING_TOPICS, RESEARCH_REPORT, POST_GENERATION, REFINEMENT];
}
