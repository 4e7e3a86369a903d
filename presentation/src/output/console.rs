//! Console output formatter for generation runs

use colored::Colorize;
use postcraft_domain::{GenerationResult, ParsedPost, PostParser, StageData};
use std::sync::Arc;

/// Formats pipeline output for console display
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    /// Judges post length; counts outside the recommended range are highlighted
    parser: Arc<PostParser>,
}

impl ConsoleFormatter {
    pub fn new(parser: Arc<PostParser>) -> Self {
        Self { parser }
    }

    /// Format the output of one stage as it arrives
    pub fn format_stage_data(&self, data: &StageData) -> String {
        match data {
            StageData::Topics { topics } => {
                format!("{}{}\n", Self::section_header("Trending Topics"), topics.trim())
            }
            StageData::Report { report } => {
                format!("{}{}\n", Self::section_header("Research Report"), report.trim())
            }
            StageData::Posts { posts, .. } => self.format_posts(posts),
        }
    }

    /// Format post options, one block per post
    pub fn format_posts(&self, posts: &[ParsedPost]) -> String {
        let mut output = Self::section_header("Post Options");

        if posts.is_empty() {
            output.push_str(&format!("\n{}\n", "No posts were generated.".yellow()));
            return output;
        }

        for post in posts {
            let count = format!("{} words", self.parser.word_count(post));
            let count = if self.parser.is_optimal_length(post) {
                count.green()
            } else {
                count.yellow()
            };
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("── Post {} · {} ──", post.id, post.style).yellow().bold(),
                count,
                post.content
            ));
        }

        output
    }

    /// Format the result of `refine`
    pub fn format_refined(&self, refined: &str) -> String {
        format!(
            "{}\n{}\n",
            Self::section_header("Refined Post"),
            refined.trim()
        )
    }

    /// Format as JSON
    pub fn format_json(result: &GenerationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the prompt listing, flagging required prompts that are missing
    pub fn format_prompts(names: &[String], missing: &[&str]) -> String {
        let mut output = format!("{}\n", "Available prompts:".cyan().bold());
        for name in names {
            output.push_str(&format!("  * {}\n", name));
        }
        if !missing.is_empty() {
            output.push_str(&format!("\n{}\n", "Missing required prompts:".red().bold()));
            for name in missing {
                output.push_str(&format!("  * {}\n", name));
            }
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
