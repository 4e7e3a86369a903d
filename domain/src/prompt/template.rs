//! Prompt templates for the post pipeline

use super::render::{placeholders, render_text};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw prompt entry as it appears in a prompt document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDefinition {
    pub system: String,
    pub human: String,
}

/// A loaded prompt document: prompt name → definition
pub type PromptDocument = BTreeMap<String, PromptDefinition>;

/// A compiled, reusable prompt template
///
/// Compilation trims both halves and records the placeholders they use;
/// it is deterministic, so the same definition always yields an equal
/// template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    system: String,
    human: String,
    variables: Vec<String>,
}

/// A prompt with every placeholder substituted, ready for the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub human: String,
}

impl PromptTemplate {
    /// Compile a template from its raw definition
    pub fn compile(name: impl Into<String>, definition: &PromptDefinition) -> Self {
        let system = definition.system.trim().to_string();
        let human = definition.human.trim().to_string();

        let mut variables = placeholders(&system);
        for var in placeholders(&human) {
            if !variables.contains(&var) {
                variables.push(var);
            }
        }

        Self {
            name: name.into(),
            system,
            human,
            variables,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn human(&self) -> &str {
        &self.human
    }

    /// Placeholder names the template expects
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Substitute `vars` into both messages.
    ///
    /// Extra variables are ignored; a missing one is an error.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<RenderedPrompt, DomainError> {
        Ok(RenderedPrompt {
            system: render_text(&self.name, &self.system, vars)?,
            human: render_text(&self.name, &self.human, vars)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refinement() -> PromptDefinition {
        PromptDefinition {
            system: "  You are a LinkedIn content optimization expert.\n".to_string(),
            human: "Original Post:\n{post}\n\nUser Feedback:\n{feedback}\n".to_string(),
        }
    }

    #[test]
    fn test_compile_trims_and_collects_variables() {
        let template = PromptTemplate::compile("refinement", &refinement());
        assert_eq!(template.name(), "refinement");
        assert_eq!(
            template.system(),
            "You are a LinkedIn content optimization expert."
        );
        assert!(template.human().ends_with("{feedback}"));
        assert_eq!(template.variables(), ["post", "feedback"]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let a = PromptTemplate::compile("refinement", &refinement());
        let b = PromptTemplate::compile("refinement", &refinement());
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_fills_both_messages() {
        let definition = PromptDefinition {
            system: "Analyst for {field}".to_string(),
            human: "Top topics in {field}\n\nAdditional context: {context}".to_string(),
        };
        let template = PromptTemplate::compile("trending_topics", &definition);
        let rendered = template
            .render(&[("field", "Healthcare"), ("context", "telehealth")])
            .unwrap();
        assert_eq!(rendered.system, "Analyst for Healthcare");
        assert_eq!(
            rendered.human,
            "Top topics in Healthcare\n\nAdditional context: telehealth"
        );
    }

    #[test]
    fn test_render_missing_variable_errors() {
        let template = PromptTemplate::compile("refinement", &refinement());
        let err = template.render(&[("post", "Hello")]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MissingPlaceholder { ref template, ref key }
                if template == "refinement" && key == "feedback"
        ));
    }
}
