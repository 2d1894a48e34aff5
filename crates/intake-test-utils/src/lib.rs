//! Testing utilities for the intake editor workspace
//!
//! Shared fixtures, a deterministic forest, and a failing store for
//! degraded-mode tests.

#![allow(missing_docs)]

use async_trait::async_trait;
use intake_export::ConfigDocument;
use intake_model::{
    Field, FieldDraft, FieldType, Section, SectionId, SectionTree, Template, TemplateDraft,
    TemplateId,
};
use intake_store::{StoreError, TemplateStore};

pub fn text_field(name: &str) -> Field {
    FieldDraft::new(name, FieldType::Text)
        .into_field()
        .unwrap()
}

pub fn required_field(name: &str, data_type: FieldType) -> Field {
    FieldDraft::new(name, data_type)
        .required()
        .into_field()
        .unwrap()
}

pub fn section(id: &str, name: &str) -> Section {
    Section::with_id(SectionId::new(id), name, "")
}

/// Roots [a, b]; a.children = [c, d]; c.children = [e].
pub fn nested_forest() -> Vec<Section> {
    let mut a = section("a", "A");
    let b = section("b", "B");
    let mut c = section("c", "C");
    let d = section("d", "D");
    let e = section("e", "E");
    c.children.push(e);
    a.children.push(c);
    a.children.push(d);
    vec![a, b]
}

pub fn nested_tree() -> SectionTree {
    SectionTree::from_sections(nested_forest()).unwrap()
}

pub fn assert_integrity(tree: &SectionTree) {
    if let Err(err) = tree.verify_integrity() {
        panic!("tree invariant violated: {err}");
    }
}

/// A store whose every call fails with a transport error. Drives the
/// degraded-mode and write-failure paths in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl FailingStore {
    fn err() -> StoreError {
        StoreError::transport("backend unreachable")
    }
}

#[async_trait]
impl TemplateStore for FailingStore {
    async fn list_templates(&self) -> Result<Vec<Template>, StoreError> {
        Err(Self::err())
    }

    async fn create_template(&self, _draft: TemplateDraft) -> Result<Template, StoreError> {
        Err(Self::err())
    }

    async fn update_template(
        &self,
        _id: &TemplateId,
        _draft: TemplateDraft,
    ) -> Result<Template, StoreError> {
        Err(Self::err())
    }

    async fn delete_template(&self, _id: &TemplateId) -> Result<(), StoreError> {
        Err(Self::err())
    }

    async fn get_configuration(
        &self,
        _id: &TemplateId,
    ) -> Result<Option<ConfigDocument>, StoreError> {
        Err(Self::err())
    }

    async fn put_configuration(
        &self,
        _id: &TemplateId,
        _document: &ConfigDocument,
    ) -> Result<(), StoreError> {
        Err(Self::err())
    }
}
