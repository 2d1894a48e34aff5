//! The persistence collaborator contract
//!
//! The concrete transport lives outside the core; the editor talks to
//! whatever implements [`TemplateStore`]. All calls are async and
//! non-blocking, and none of them are required for local editing to
//! continue.

use async_trait::async_trait;
use intake_export::ConfigDocument;
use intake_model::{Template, TemplateDraft, TemplateId};

use crate::error::StoreError;

/// Remote template CRUD plus configuration snapshots keyed by template
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// List all stored templates
    async fn list_templates(&self) -> Result<Vec<Template>, StoreError>;

    /// Create a template; the store assigns the id
    async fn create_template(&self, draft: TemplateDraft) -> Result<Template, StoreError>;

    /// Replace the content of an existing template
    async fn update_template(
        &self,
        id: &TemplateId,
        draft: TemplateDraft,
    ) -> Result<Template, StoreError>;

    /// Delete a template
    async fn delete_template(&self, id: &TemplateId) -> Result<(), StoreError>;

    /// Fetch the stored configuration snapshot, if any
    async fn get_configuration(
        &self,
        id: &TemplateId,
    ) -> Result<Option<ConfigDocument>, StoreError>;

    /// Persist a configuration snapshot
    async fn put_configuration(
        &self,
        id: &TemplateId,
        document: &ConfigDocument,
    ) -> Result<(), StoreError>;
}
