//! In-memory reference store
//!
//! Backs the demo binary and tests. Locks are per-map and held only
//! across the map operation, never across an await.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use intake_export::ConfigDocument;
use intake_model::{Template, TemplateDraft, TemplateId};
use parking_lot::RwLock;
use tracing::info;

use crate::error::StoreError;
use crate::store::TemplateStore;

/// A [`TemplateStore`] kept entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: RwLock<IndexMap<TemplateId, Template>>,
    configurations: RwLock<IndexMap<TemplateId, ConfigDocument>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with templates
    #[must_use]
    pub fn with_templates(templates: Vec<Template>) -> Self {
        let store = Self::new();
        {
            let mut map = store.templates.write();
            for template in templates {
                map.insert(template.id.clone(), template);
            }
        }
        store
    }

    /// Number of stored templates
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.read().len()
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn list_templates(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.templates.read().values().cloned().collect())
    }

    async fn create_template(&self, draft: TemplateDraft) -> Result<Template, StoreError> {
        let template = Template {
            id: TemplateId::generate(),
            name: draft.name,
            description: draft.description,
            domain: draft.domain,
            created: Utc::now(),
            sections: draft.sections,
        };
        info!(id = %template.id, name = %template.name, "template created");
        self.templates
            .write()
            .insert(template.id.clone(), template.clone());
        Ok(template)
    }

    async fn update_template(
        &self,
        id: &TemplateId,
        draft: TemplateDraft,
    ) -> Result<Template, StoreError> {
        let mut map = self.templates.write();
        let existing = map.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.clone(),
        })?;
        existing.name = draft.name;
        existing.description = draft.description;
        existing.domain = draft.domain;
        existing.sections = draft.sections;
        info!(%id, "template updated");
        Ok(existing.clone())
    }

    async fn delete_template(&self, id: &TemplateId) -> Result<(), StoreError> {
        self.templates
            .write()
            .shift_remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        self.configurations.write().shift_remove(id);
        info!(%id, "template deleted");
        Ok(())
    }

    async fn get_configuration(
        &self,
        id: &TemplateId,
    ) -> Result<Option<ConfigDocument>, StoreError> {
        Ok(self.configurations.read().get(id).cloned())
    }

    async fn put_configuration(
        &self,
        id: &TemplateId,
        document: &ConfigDocument,
    ) -> Result<(), StoreError> {
        if !self.templates.read().contains_key(id) {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        self.configurations.write().insert(id.clone(), document.clone());
        info!(%id, "configuration stored");
        Ok(())
    }
}
