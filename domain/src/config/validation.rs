//! Configuration validation for [`AgentConfig`].
//!
//! Checks values that deserialize fine but cannot drive a run: empty model
//! names, an uncompilable split pattern, query templates that forget
//! `{field}` and so on. Issues carry a severity so callers can decide
//! whether to abort or just warn.
//!
//! # Examples
//!
//! ```
//! use postcraft_domain::AgentConfig;
//! use postcraft_domain::config::validation::has_errors;
//!
//! let issues = AgentConfig::default().validate();
//! assert!(!has_errors(&issues));
//! ```

use super::agent_config::{AgentConfig, ModelSettings, PostSettings, SearchSettings};
use crate::prompt::placeholders;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name is empty or whitespace.
    EmptyModelName { field: String },
    /// Temperature outside `0.0..=2.0`.
    TemperatureOutOfRange,
    /// A search template does not reference `{field}`.
    QueryWithoutField { field: String },
    /// No research queries configured; research runs on nothing.
    NoResearchQueries,
    /// The split pattern is not a valid regular expression.
    InvalidSplitPattern,
    /// A post marker is not recognized by the split pattern.
    UnmatchedMarker { marker: String },
    /// Fewer styles than markers; later posts fall back to "Variation N".
    MissingStyles,
    /// `max_posts` is zero.
    ZeroMaxPosts,
    /// `min_word_count` exceeds `max_word_count`.
    InvertedWordRange,
    /// A request timeout of zero seconds.
    ZeroTimeout { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

impl AgentConfig {
    /// Validate every section, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = validate_models(&self.model);
        issues.extend(validate_search(&self.search));
        issues.extend(validate_post(&self.post));
        issues
    }
}

fn validate_models(model: &ModelSettings) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for (field, name) in [
        ("model.llm_model", model.llm_model.as_str()),
        ("model.search_model", model.search_model.as_str()),
    ] {
        if name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyModelName {
                    field: field.to_string(),
                },
                message: format!("{} is empty", field),
            });
        }
    }

    if !(0.0..=2.0).contains(&model.llm_temperature) {
        issues.push(ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::TemperatureOutOfRange,
            message: format!(
                "model.llm_temperature = {} is outside 0.0..=2.0",
                model.llm_temperature
            ),
        });
    }

    issues
}

fn validate_search(search: &SearchSettings) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let mut check_field = |name: String, template: &str| {
        if !placeholders(template).iter().any(|p| p == "field") {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                message: format!("{} does not reference {{field}}", name),
                code: ConfigIssueCode::QueryWithoutField { field: name },
            });
        }
    };

    check_field(
        "search.trending_query_template".to_string(),
        &search.trending_query_template,
    );
    for (i, query) in search.research_queries.iter().enumerate() {
        check_field(format!("search.research_queries[{}]", i), query);
    }

    if search.research_queries.is_empty() {
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::NoResearchQueries,
            message: "search.research_queries is empty; the research report will have no findings"
                .to_string(),
        });
    }

    issues
}

fn validate_post(post: &PostSettings) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    match post.unmatched_markers() {
        Ok(unmatched) => {
            for marker in unmatched {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::UnmatchedMarker {
                        marker: marker.to_string(),
                    },
                    message: format!(
                        "post marker '{}' is not matched by post.post_split_pattern",
                        marker
                    ),
                });
            }
        }
        Err(e) => issues.push(ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidSplitPattern,
            message: e.to_string(),
        }),
    }

    if post.post_styles.len() < post.post_markers.len() {
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::MissingStyles,
            message: format!(
                "{} post markers but only {} styles",
                post.post_markers.len(),
                post.post_styles.len()
            ),
        });
    }

    if post.max_posts == 0 {
        issues.push(ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::ZeroMaxPosts,
            message: "post.max_posts must be at least 1".to_string(),
        });
    }

    if post.min_word_count > post.max_word_count {
        issues.push(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvertedWordRange,
            message: format!(
                "post.min_word_count ({}) exceeds post.max_word_count ({})",
                post.min_word_count, post.max_word_count
            ),
        });
    }

    issues
}
