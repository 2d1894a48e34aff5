//! The editor session orchestrator
//!
//! Owns the single live tree, the drag controller, and the view
//! preferences, and wires explicit dialog edits and drag gestures to
//! the structural mutators. All mutation entry points are synchronous;
//! only store calls await, and the tree stays editable regardless of
//! their outcome.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use intake_export::{assemble_configuration, ConfigDocument, ExportContext, ViewPrefs};
use intake_gesture::{DragController, DragEvent};
use intake_model::{
    EditStatus, FieldDraft, SectionDraft, SectionId, SectionTree, Template, TemplateDraft,
    TemplateId, ValidationError,
};
use intake_store::{sample_templates, TemplateStore};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::EditorError;
use crate::notify::{Notice, NotificationSink};

/// One user's editing session over one live section tree
pub struct EditorSession {
    tree: SectionTree,
    drag: DragController,
    prefs: ViewPrefs,
    template_id: Option<TemplateId>,
    template_name: String,
    template_description: String,
    template_domain: String,
    modified_at: DateTime<Utc>,
    store: Arc<dyn TemplateStore>,
    sink: Arc<dyn NotificationSink>,
    config: SessionConfig,
}

impl EditorSession {
    /// Start a session with an empty unsaved tree
    #[must_use]
    pub fn new(
        store: Arc<dyn TemplateStore>,
        sink: Arc<dyn NotificationSink>,
        config: SessionConfig,
    ) -> Self {
        Self {
            tree: SectionTree::new(),
            drag: DragController::new(),
            prefs: config.initial_prefs,
            template_id: None,
            template_name: "Untitled Template".to_string(),
            template_description: String::new(),
            template_domain: "general".to_string(),
            modified_at: Utc::now(),
            store,
            sink,
            config,
        }
    }

    /// The live tree, read-only
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Current view flags
    #[inline]
    #[must_use]
    pub fn view_prefs(&self) -> &ViewPrefs {
        &self.prefs
    }

    /// Replace the view flags
    pub fn set_view_prefs(&mut self, prefs: ViewPrefs) {
        self.prefs = prefs;
    }

    /// Name of the template being edited
    #[inline]
    #[must_use]
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Id of the bound template, absent for unsaved work
    #[inline]
    #[must_use]
    pub fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }

    /// When the tree was last edited
    #[inline]
    #[must_use]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// List stored templates, falling back to the built-in samples
    /// when the store is unreachable
    pub async fn load_templates(&self) -> Vec<Template> {
        match self.store.list_templates().await {
            Ok(templates) => templates,
            Err(err) => {
                warn!(%err, "template listing failed");
                self.sink
                    .notify(Notice::warning("Could not reach the template store"));
                if self.config.fallback_to_samples {
                    sample_templates()
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Load an independent copy of a template's forest into the
    /// session
    pub fn open_template(&mut self, template: &Template) -> Result<(), EditorError> {
        let tree = SectionTree::from_sections(template.sections.clone())?;
        self.tree = tree;
        self.drag.reset();
        self.template_id = Some(template.id.clone());
        self.template_name = template.name.clone();
        self.template_description = template.description.clone();
        self.template_domain = template.domain.clone();
        self.touch();
        info!(id = %template.id, name = %template.name, "template opened");
        Ok(())
    }

    /// Start over with an empty, unsaved tree
    pub fn new_template(&mut self, name: impl Into<String>) -> Result<(), EditorError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "template name",
            }
            .into());
        }
        self.tree = SectionTree::new();
        self.drag.reset();
        self.template_id = None;
        self.template_name = name;
        self.template_description = String::new();
        self.template_domain = "general".to_string();
        self.touch();
        Ok(())
    }

    /// Persist the live tree, creating or updating by binding
    ///
    /// A store failure leaves the tree and binding untouched; editing
    /// continues locally.
    pub async fn save_template(&mut self) -> Result<Template, EditorError> {
        let draft = TemplateDraft {
            name: self.template_name.clone(),
            description: self.template_description.clone(),
            domain: self.template_domain.clone(),
            sections: self.tree.to_sections(),
        };
        let result = match &self.template_id {
            Some(id) => self.store.update_template(id, draft).await,
            None => self.store.create_template(draft).await,
        };
        match result {
            Ok(template) => {
                self.template_id = Some(template.id.clone());
                self.sink
                    .notify(Notice::success(format!("Saved \"{}\"", template.name)));
                Ok(template)
            }
            Err(err) => {
                warn!(%err, "template save failed");
                self.sink
                    .notify(Notice::error("Saving the template failed"));
                Err(err.into())
            }
        }
    }

    /// Project the current tree and view flags into a configuration
    /// document
    #[must_use]
    pub fn export_configuration(&self) -> ConfigDocument {
        assemble_configuration(
            &self.tree,
            &self.prefs,
            &ExportContext {
                template_id: self.template_id.as_ref(),
                template_name: &self.template_name,
                last_modified: self.modified_at,
                source: &self.config.configuration_source,
            },
        )
    }

    /// Export and persist the configuration snapshot
    pub async fn save_configuration(&self) -> Result<(), EditorError> {
        let id = self.template_id.clone().ok_or(EditorError::NoTemplate)?;
        let document = self.export_configuration();
        match self.store.put_configuration(&id, &document).await {
            Ok(()) => {
                self.sink.notify(Notice::success("Configuration saved"));
                Ok(())
            }
            Err(err) => {
                warn!(%err, "configuration save failed");
                self.sink
                    .notify(Notice::error("Saving the configuration failed"));
                Err(err.into())
            }
        }
    }

    /// Add a top-level section from a validated dialog record
    pub fn add_section(&mut self, draft: SectionDraft) -> Result<SectionId, EditorError> {
        let section = draft.into_section()?;
        let id = section.id.clone();
        let status = self.tree.add_root(section);
        self.complete("add section", status)?;
        Ok(id)
    }

    /// Add a category under an existing section
    pub fn add_category(
        &mut self,
        parent: &SectionId,
        draft: SectionDraft,
    ) -> Result<SectionId, EditorError> {
        let section = draft.into_section()?;
        let id = section.id.clone();
        let status = self.tree.add_child(parent, section);
        self.complete("add category", status)?;
        Ok(id)
    }

    /// Rename a section or category
    pub fn rename_section(&mut self, id: &SectionId, name: &str) -> Result<(), EditorError> {
        SectionDraft::new(name, "").validate()?;
        let status = self.tree.rename(id, name);
        self.complete("rename section", status)
    }

    /// Toggle a section's disabled flag
    pub fn set_section_disabled(
        &mut self,
        id: &SectionId,
        disabled: bool,
    ) -> Result<(), EditorError> {
        let status = self.tree.set_disabled(id, disabled);
        self.complete("toggle section", status)
    }

    /// Delete a section with its whole subtree, permanently
    pub fn delete_section(&mut self, id: &SectionId) -> Result<(), EditorError> {
        let status = self.tree.delete(id);
        self.complete("delete section", status)
    }

    /// Append a field to a section from a validated dialog record
    pub fn add_field(
        &mut self,
        section: &SectionId,
        draft: FieldDraft,
    ) -> Result<(), EditorError> {
        let field = draft.into_field()?;
        let status = self.tree.add_field(section, field);
        self.complete("add field", status)
    }

    /// Replace an existing field from a validated dialog record
    pub fn update_field(
        &mut self,
        section: &SectionId,
        index: usize,
        draft: FieldDraft,
    ) -> Result<(), EditorError> {
        let field = draft.into_field()?;
        let status = self.tree.update_field_at(section, index, field);
        self.complete("update field", status)
    }

    /// Remove the field at an index
    pub fn remove_field(&mut self, section: &SectionId, index: usize) -> Result<(), EditorError> {
        let status = match self.tree.remove_field_at(section, index) {
            Some(_) => EditStatus::Applied,
            None if self.tree.contains(section) => EditStatus::IndexOutOfRange,
            None => EditStatus::TargetMissing,
        };
        self.complete("remove field", status)
    }

    /// Feed one pointer event through the gesture controller
    ///
    /// Returns the mutator's verdict when the event completed a
    /// gesture, `None` for intermediate events and cancelled drags.
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<EditStatus> {
        let outcome = self.drag.handle(event, &self.tree)?;
        let status = outcome.apply(&mut self.tree);
        debug!(?outcome, ?status, "gesture outcome applied");
        if status.is_applied() {
            self.touch();
        }
        Some(status)
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Bump the edit clock on success; log, notify, and surface a miss
    fn complete(&mut self, op: &'static str, status: EditStatus) -> Result<(), EditorError> {
        if status.is_applied() {
            debug!(op, "edit applied");
            self.touch();
            Ok(())
        } else {
            warn!(op, ?status, "edit not applied");
            self.sink
                .notify(Notice::warning(format!("Could not {op}")));
            Err(EditorError::NotApplied { status })
        }
    }
}
