//! Prompt store port
//!
//! Named prompt templates loaded from a declarative document. Loading is
//! lazy and cached; [`reload`](PromptStorePort::reload) drops the caches so
//! the next access re-reads the source.

use postcraft_domain::{DomainError, PromptDefinition, PromptTemplate};
use std::collections::BTreeMap;
use std::sync::Arc;

pub trait PromptStorePort: Send + Sync {
    /// Compiled template by name.
    ///
    /// Fails with [`DomainError::PromptNotFound`] listing the available names.
    fn get_template(&self, name: &str) -> Result<Arc<PromptTemplate>, DomainError>;

    /// Raw, uncompiled prompt text by name
    fn get_prompt(&self, name: &str) -> Result<PromptDefinition, DomainError>;

    /// Names of every loadable prompt
    fn list_prompts(&self) -> Result<Vec<String>, DomainError>;

    /// Every loadable template, compiled
    fn get_all_templates(&self) -> Result<BTreeMap<String, Arc<PromptTemplate>>, DomainError> {
        self.list_prompts()?
            .into_iter()
            .map(|name| {
                let template = self.get_template(&name)?;
                Ok((name, template))
            })
            .collect()
    }

    /// Clear the document and template caches
    fn reload(&self);
}
