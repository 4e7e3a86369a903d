//! YAML-backed prompt store
//!
//! The document is a mapping of prompt name to `{system, human}`. Entries
//! whose value is not a mapping (a top-level `version:` key, a stray string)
//! are ignored and never show up in `list_prompts`. A mapping entry that is
//! not a valid prompt makes the whole document malformed.
//!
//! Both the parsed document and the compiled templates are cached until
//! [`reload`](PromptStorePort::reload).

use postcraft_application::PromptStorePort;
use postcraft_domain::prompt::names::REQUIRED;
use postcraft_domain::{DomainError, PromptDefinition, PromptDocument, PromptTemplate};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Default prompts shipped with the binary
pub const EMBEDDED_PROMPTS: &str = include_str!("../../resources/prompts.yml");

/// Where the prompt document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// [`EMBEDDED_PROMPTS`]
    Embedded,
    /// A YAML file, re-read on every reload
    File(PathBuf),
}

impl std::fmt::Display for PromptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptSource::Embedded => write!(f, "embedded prompts"),
            PromptSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Prompt store reading a YAML document
#[derive(Debug)]
pub struct YamlPromptStore {
    source: PromptSource,
    document: Mutex<Option<Arc<PromptDocument>>>,
    templates: Mutex<HashMap<String, Arc<PromptTemplate>>>,
}

impl YamlPromptStore {
    pub fn new(source: PromptSource) -> Self {
        Self {
            source,
            document: Mutex::new(None),
            templates: Mutex::new(HashMap::new()),
        }
    }

    /// Store over the compiled-in defaults
    pub fn embedded() -> Self {
        Self::new(PromptSource::Embedded)
    }

    /// Store over a file; the file is not read until first use
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(PromptSource::File(path.into()))
    }

    pub fn source(&self) -> &PromptSource {
        &self.source
    }

    /// Required pipeline prompts the document does not define
    pub fn missing_required(&self) -> Result<Vec<&'static str>, DomainError> {
        let document = self.document()?;
        Ok(REQUIRED
            .into_iter()
            .filter(|name| !document.contains_key(*name))
            .collect())
    }

    fn document(&self) -> Result<Arc<PromptDocument>, DomainError> {
        let mut cached = lock(&self.document);
        if let Some(document) = cached.as_ref() {
            return Ok(Arc::clone(document));
        }

        let document = Arc::new(self.read_source()?);
        *cached = Some(Arc::clone(&document));
        Ok(document)
    }

    fn read_source(&self) -> Result<PromptDocument, DomainError> {
        let origin = self.source.to_string();
        let text = match &self.source {
            PromptSource::Embedded => EMBEDDED_PROMPTS.to_string(),
            PromptSource::File(path) => match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(DomainError::SourceNotFound(origin));
                }
                Err(e) => return Err(DomainError::MalformedSource(format!("{}: {}", origin, e))),
            },
        };

        let document = parse_document(&text, &origin)?;
        info!(source = %origin, prompts = document.len(), "Loaded prompts");
        Ok(document)
    }
}

impl PromptStorePort for YamlPromptStore {
    fn get_template(&self, name: &str) -> Result<Arc<PromptTemplate>, DomainError> {
        if let Some(template) = lock(&self.templates).get(name) {
            debug!(prompt = name, "Template cache hit");
            return Ok(Arc::clone(template));
        }

        let definition = self.get_prompt(name)?;
        let template = Arc::new(PromptTemplate::compile(name, &definition));
        debug!(prompt = name, variables = ?template.variables(), "Compiled template");

        Ok(Arc::clone(
            lock(&self.templates)
                .entry(name.to_string())
                .or_insert(template),
        ))
    }

    fn get_prompt(&self, name: &str) -> Result<PromptDefinition, DomainError> {
        let document = self.document()?;
        document
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::PromptNotFound {
                name: name.to_string(),
                available: document.keys().cloned().collect(),
            })
    }

    fn list_prompts(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.document()?.keys().cloned().collect())
    }

    fn reload(&self) {
        *lock(&self.document) = None;
        lock(&self.templates).clear();
        info!(source = %self.source, "Prompt cache cleared, will reload on next access");
    }
}

/// Parse a YAML prompt document, skipping entries that are not mappings
pub fn parse_document(text: &str, origin: &str) -> Result<PromptDocument, DomainError> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| DomainError::MalformedSource(format!("{}: {}", origin, e)))?;

    let Value::Mapping(entries) = value else {
        return Err(DomainError::MalformedSource(format!(
            "{}: expected a mapping of prompt names",
            origin
        )));
    };

    let mut document = PromptDocument::new();
    for (key, entry) in entries {
        let Value::String(name) = key else {
            continue;
        };
        if !entry.is_mapping() {
            debug!(entry = %name, "Skipping non-prompt entry");
            continue;
        }
        let definition = serde_yaml::from_value::<PromptDefinition>(entry).map_err(|e| {
            DomainError::MalformedSource(format!("{}: prompt '{}': {}", origin, name, e))
        })?;
        document.insert(name, definition);
    }
    Ok(document)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_domain::prompt::names;
    use std::path::Path;
    use tempfile::TempDir;

    const SMALL: &str = r#"
version: 2
refinement:
  system: "  Refine politely.  "
  human: "Post: {post}\nFeedback: {feedback}"
trending_topics:
  system: Trends for {field}
  human: "Context: {context}"
notes: just a string
"#;

    fn file_store(dir: &TempDir, contents: &str) -> (YamlPromptStore, PathBuf) {
        let path = dir.path().join("prompts.yml");
        fs::write(&path, contents).unwrap();
        (YamlPromptStore::from_file(&path), path)
    }

    #[test]
    fn test_embedded_defines_every_required_prompt() {
        let store = YamlPromptStore::embedded();
        assert!(store.missing_required().unwrap().is_empty());
        assert_eq!(
            store.list_prompts().unwrap(),
            [
                "post_generation",
                "refinement",
                "research_report",
                "trending_topics"
            ]
        );
    }

    #[test]
    fn test_embedded_templates_use_pipeline_placeholders() {
        let store = YamlPromptStore::embedded();
        let vars = |name: &str| store.get_template(name).unwrap().variables().to_vec();
        assert_eq!(vars(names::TRENDING_TOPICS), ["field", "context"]);
        assert_eq!(vars(names::RESEARCH_REPORT), ["topic", "field", "context"]);
        assert_eq!(vars(names::POST_GENERATION), ["report", "field"]);
        assert_eq!(vars(names::REFINEMENT), ["post", "feedback"]);
    }

    #[test]
    fn test_embedded_generation_prompt_names_markers() {
        let store = YamlPromptStore::embedded();
        let template = store.get_template(names::POST_GENERATION).unwrap();
        assert!(template.system().contains("--- POST 1 ---"));
        assert!(template.system().ends_with("headers."));
    }

    #[test]
    fn test_non_prompt_entries_are_skipped() {
        let document = parse_document(SMALL, "test").unwrap();
        let names: Vec<_> = document.keys().map(String::as_str).collect();
        assert_eq!(names, ["refinement", "trending_topics"]);
    }

    #[test]
    fn test_misshapen_prompt_entry_is_malformed() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(
            &dir,
            "version: 2\ntrending_topics:\n  system: Trends for {field}\n  humann: \"{context}\"\n",
        );

        for err in [
            store.list_prompts().unwrap_err(),
            store.get_template("trending_topics").unwrap_err(),
        ] {
            match err {
                DomainError::MalformedSource(message) => {
                    assert!(message.contains("prompt 'trending_topics'"), "{message}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_template_is_trimmed_and_cached() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, SMALL);

        let first = store.get_template("refinement").unwrap();
        assert_eq!(first.system(), "Refine politely.");
        let second = store.get_template("refinement").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_get_prompt_returns_raw_text() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, SMALL);
        let prompt = store.get_prompt("refinement").unwrap();
        assert_eq!(prompt.system, "  Refine politely.  ");
    }

    #[test]
    fn test_unknown_prompt_lists_available_names() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, SMALL);

        let err = store.get_template("version").unwrap_err();
        match err {
            DomainError::PromptNotFound { name, available } => {
                assert_eq!(name, "version");
                assert_eq!(available, ["refinement", "trending_topics"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            store.missing_required().unwrap(),
            [names::RESEARCH_REPORT, names::POST_GENERATION]
        );
    }

    #[test]
    fn test_get_all_templates() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, SMALL);
        let templates = store.get_all_templates().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates["trending_topics"].variables(), ["field", "context"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let store = YamlPromptStore::from_file(Path::new("/nonexistent/prompts.yml"));
        let err = store.list_prompts().unwrap_err();
        assert!(matches!(err, DomainError::SourceNotFound(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_documents() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, "refinement: [unclosed");
        assert!(matches!(
            store.list_prompts(),
            Err(DomainError::MalformedSource(_))
        ));

        let (store, _) = file_store(&dir, "- a\n- b\n");
        assert!(matches!(
            store.list_prompts(),
            Err(DomainError::MalformedSource(_))
        ));
    }

    #[test]
    fn test_reload_rereads_the_file() {
        let dir = TempDir::new().unwrap();
        let (store, path) = file_store(&dir, SMALL);
        let before = store.get_template("refinement").unwrap();

        fs::write(
            &path,
            "refinement:\n  system: Be brief.\n  human: \"{post} / {feedback}\"\n",
        )
        .unwrap();

        // Still cached until reload
        assert_eq!(store.list_prompts().unwrap().len(), 2);

        store.reload();
        let after = store.get_template("refinement").unwrap();
        assert_eq!(after.system(), "Be brief.");
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(store.list_prompts().unwrap(), ["refinement"]);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let (store, _) = file_store(&dir, SMALL);
        store.reload();
        store.reload();
        let a = store.get_template("trending_topics").unwrap();
        store.reload();
        let b = store.get_template("trending_topics").unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_reload_surfaces_deleted_file() {
        let dir = TempDir::new().unwrap();
        let (store, path) = file_store(&dir, SMALL);
        assert!(store.get_template("refinement").is_ok());

        fs::remove_file(&path).unwrap();
        store.reload();
        assert!(matches!(
            store.get_template("refinement"),
            Err(DomainError::SourceNotFound(_))
        ));
    }
}
