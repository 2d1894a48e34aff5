//! CRUD behavior of the in-memory reference store.

use chrono::Utc;
use intake_export::{assemble_configuration, ExportContext, ViewPrefs};
use intake_model::{Section, SectionTree, TemplateDraft, TemplateId};
use intake_store::{sample_templates, MemoryStore, StoreError, TemplateStore};
use pretty_assertions::assert_eq;

fn draft(name: &str) -> TemplateDraft {
    TemplateDraft {
        name: name.to_string(),
        description: String::new(),
        domain: "general".to_string(),
        sections: vec![Section::new("Chief Complaint", "")],
    }
}

#[tokio::test]
async fn create_assigns_id_and_lists_back() {
    let store = MemoryStore::new();
    let created = store.create_template(draft("Intake A")).await.unwrap();
    let listed = store.list_templates().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn update_replaces_content_and_keeps_id() {
    let store = MemoryStore::new();
    let created = store.create_template(draft("Before")).await.unwrap();
    let updated = store
        .update_template(&created.id, draft("After"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "After");
    assert_eq!(store.template_count(), 1);
}

#[tokio::test]
async fn missing_ids_report_not_found() {
    let store = MemoryStore::new();
    let ghost = TemplateId::new("ghost");
    assert_eq!(
        store.update_template(&ghost, draft("x")).await,
        Err(StoreError::NotFound { id: ghost.clone() })
    );
    assert_eq!(
        store.delete_template(&ghost).await,
        Err(StoreError::NotFound { id: ghost })
    );
}

#[tokio::test]
async fn configuration_round_trips_and_dies_with_its_template() {
    let store = MemoryStore::new();
    let created = store.create_template(draft("Intake A")).await.unwrap();
    let tree = SectionTree::from_sections(created.sections.clone()).unwrap();
    let doc = assemble_configuration(
        &tree,
        &ViewPrefs::default(),
        &ExportContext {
            template_id: Some(&created.id),
            template_name: &created.name,
            last_modified: Utc::now(),
            source: "template-editor",
        },
    );

    store.put_configuration(&created.id, &doc).await.unwrap();
    assert_eq!(
        store.get_configuration(&created.id).await.unwrap(),
        Some(doc)
    );

    store.delete_template(&created.id).await.unwrap();
    assert_eq!(store.get_configuration(&created.id).await.unwrap(), None);
}

#[tokio::test]
async fn configuration_for_unknown_template_is_rejected() {
    let store = MemoryStore::new();
    let ghost = TemplateId::new("ghost");
    let tree = SectionTree::new();
    let doc = assemble_configuration(
        &tree,
        &ViewPrefs::default(),
        &ExportContext {
            template_id: None,
            template_name: "unsaved",
            last_modified: Utc::now(),
            source: "template-editor",
        },
    );
    assert!(matches!(
        store.put_configuration(&ghost, &doc).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn seeding_with_samples_works() {
    let store = MemoryStore::with_templates(sample_templates());
    let listed = store.list_templates().await.unwrap();
    assert_eq!(listed.len(), sample_templates().len());
}
