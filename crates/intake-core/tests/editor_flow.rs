//! End-to-end session flows: assemble, drag, export, and the
//! degraded-mode persistence paths.

use std::sync::Arc;

use intake_core::{EditorSession, EditorError, NoticeLevel, RecordingSink, SessionConfig};
use intake_gesture::DragEvent;
use intake_model::{EditStatus, FieldDraft, FieldType, SectionDraft, ValidationError};
use intake_store::{sample_templates, MemoryStore, TemplateStore};
use intake_test_utils::{assert_integrity, FailingStore};
use pretty_assertions::assert_eq;

fn session_with(store: Arc<dyn TemplateStore>) -> (EditorSession, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let session = EditorSession::new(store, sink.clone(), SessionConfig::default());
    (session, sink)
}

#[tokio::test]
async fn assemble_drag_and_export_end_to_end() {
    let (mut session, _sink) = session_with(Arc::new(MemoryStore::new()));

    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    let b = session.add_section(SectionDraft::new("B", "")).unwrap();
    let c = session
        .add_category(&a, SectionDraft::new("C", ""))
        .unwrap();
    session
        .add_field(&c, FieldDraft::new("f", FieldType::Text).required())
        .unwrap();

    // Drag C onto B: different parents, so it re-parents.
    let _ = session.handle_drag(DragEvent::SectionDragStart { section: c.clone() });
    let _ = session.handle_drag(DragEvent::SectionDragOver { section: b.clone() });
    let status = session.handle_drag(DragEvent::DropOnSection { target: b.clone() });
    assert_eq!(status, Some(EditStatus::Applied));
    let _ = session.handle_drag(DragEvent::DragEnd);

    let tree = session.tree();
    assert!(tree.get(&a).unwrap().children().is_empty());
    assert_eq!(tree.get(&b).unwrap().children(), &[c.clone()]);
    assert_eq!(tree.get(&c).unwrap().fields.len(), 1);
    assert!(tree.get(&c).unwrap().fields[0].required);
    assert_integrity(tree);

    let document = session.export_configuration();
    assert_eq!(document.metadata.total_sections, 2);
    assert_eq!(document.metadata.total_fields, 1);
    assert_eq!(document.metadata.configuration_source, "template-editor");

    let saved = session.save_template().await.unwrap();
    assert_eq!(session.template_id(), Some(&saved.id));
    session.save_configuration().await.unwrap();
}

#[tokio::test]
async fn listing_falls_back_to_samples_when_store_is_down() {
    let (session, sink) = session_with(Arc::new(FailingStore));
    let templates = session.load_templates().await;
    assert_eq!(templates, sample_templates());
    assert!(sink.has_level(NoticeLevel::Warning));
}

#[tokio::test]
async fn fallback_can_be_disabled() {
    let sink = Arc::new(RecordingSink::new());
    let config = SessionConfig {
        fallback_to_samples: false,
        ..SessionConfig::default()
    };
    let session = EditorSession::new(Arc::new(FailingStore), sink, config);
    assert!(session.load_templates().await.is_empty());
}

#[tokio::test]
async fn save_failure_keeps_the_tree_editable() {
    let (mut session, sink) = session_with(Arc::new(FailingStore));
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    let before = session.tree().clone();

    assert!(matches!(
        session.save_template().await,
        Err(EditorError::Store(_))
    ));
    assert_eq!(session.tree(), &before);
    assert!(session.template_id().is_none());
    assert!(sink.has_level(NoticeLevel::Error));

    // Editing continues locally after the failed save.
    session.rename_section(&a, "Still Editable").unwrap();
    assert_eq!(session.tree().get(&a).unwrap().name, "Still Editable");
}

#[tokio::test]
async fn validation_blocks_before_any_mutation() {
    let (mut session, _sink) = session_with(Arc::new(MemoryStore::new()));
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    let before = session.tree().clone();

    assert!(matches!(
        session.add_section(SectionDraft::new("   ", "")),
        Err(EditorError::Validation(ValidationError::Empty { .. }))
    ));
    assert!(matches!(
        session.rename_section(&a, ""),
        Err(EditorError::Validation(_))
    ));
    let mut bad_field = FieldDraft::new("Weight", FieldType::Number);
    bad_field.length = Some("heavy".to_string());
    assert!(matches!(
        session.add_field(&a, bad_field),
        Err(EditorError::Validation(ValidationError::NonNumericLength { .. }))
    ));
    assert_eq!(session.tree(), &before);
}

#[tokio::test]
async fn update_field_edits_in_place_and_reports_misses() {
    let (mut session, sink) = session_with(Arc::new(MemoryStore::new()));
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    session
        .add_field(&a, FieldDraft::new("Onset", FieldType::Date))
        .unwrap();

    session
        .update_field(&a, 0, FieldDraft::new("Onset Date", FieldType::Date).required())
        .unwrap();
    let updated = &session.tree().get(&a).unwrap().fields[0];
    assert_eq!(updated.name, "Onset Date");
    assert!(updated.required);

    // Validation blocks before any mutation.
    let before = session.tree().clone();
    assert!(matches!(
        session.update_field(&a, 0, FieldDraft::new("  ", FieldType::Text)),
        Err(EditorError::Validation(_))
    ));
    assert_eq!(session.tree(), &before);

    // An out-of-range slot is a reported miss, not a panic.
    let err = session
        .update_field(&a, 7, FieldDraft::new("Late", FieldType::Text))
        .unwrap_err();
    assert!(matches!(
        err,
        EditorError::NotApplied {
            status: EditStatus::IndexOutOfRange
        }
    ));
    assert!(sink.has_level(NoticeLevel::Warning));
    assert_eq!(session.tree(), &before);
}

#[tokio::test]
async fn structural_miss_is_reported_not_panicked() {
    let (mut session, sink) = session_with(Arc::new(MemoryStore::new()));
    let ghost = intake_model::SectionId::new("ghost");

    let err = session
        .add_category(&ghost, SectionDraft::new("Orphan", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        EditorError::NotApplied {
            status: EditStatus::TargetMissing
        }
    ));
    assert!(sink.has_level(NoticeLevel::Warning));
    assert!(session.tree().is_empty());
}

#[tokio::test]
async fn open_template_loads_an_independent_copy() {
    let store = Arc::new(MemoryStore::with_templates(sample_templates()));
    let (mut session, _sink) = session_with(store);
    let templates = session.load_templates().await;
    let first = templates[0].clone();

    session.open_template(&first).unwrap();
    assert_eq!(session.template_id(), Some(&first.id));
    assert_eq!(session.template_name(), first.name);
    assert_eq!(session.tree().to_sections(), first.sections);

    // Editing the session tree never touches the source template.
    let root = session.tree().roots()[0].clone();
    session.delete_section(&root).unwrap();
    assert_ne!(session.tree().to_sections(), first.sections);
}

#[tokio::test]
async fn new_template_starts_from_the_default_domain() {
    let (mut session, _sink) = session_with(Arc::new(MemoryStore::new()));
    let cardiology = sample_templates()
        .into_iter()
        .find(|t| t.domain == "cardiology")
        .unwrap();
    session.open_template(&cardiology).unwrap();

    // A fresh template must not inherit the previous template's domain.
    session.new_template("Fresh Intake").unwrap();
    let saved = session.save_template().await.unwrap();
    assert_eq!(saved.domain, "general");
    assert!(saved.sections.is_empty());
}

#[tokio::test]
async fn saved_configuration_round_trips_through_the_store() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, _sink) = session_with(store.clone());
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    session
        .add_field(&a, FieldDraft::new("f", FieldType::Text))
        .unwrap();

    let saved = session.save_template().await.unwrap();
    session.save_configuration().await.unwrap();

    let stored = store.get_configuration(&saved.id).await.unwrap().unwrap();
    assert_eq!(stored.metadata.total_fields, 1);
    assert_eq!(stored.template_id.as_deref(), Some(saved.id.as_str()));
}

#[tokio::test]
async fn save_configuration_requires_a_binding() {
    let (session, _sink) = session_with(Arc::new(MemoryStore::new()));
    assert!(matches!(
        session.save_configuration().await,
        Err(EditorError::NoTemplate)
    ));
}

#[tokio::test]
async fn same_parent_drop_reorders_roots() {
    let (mut session, _sink) = session_with(Arc::new(MemoryStore::new()));
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    let b = session.add_section(SectionDraft::new("B", "")).unwrap();
    let c = session.add_section(SectionDraft::new("C", "")).unwrap();

    // Both root-level: root is a synthetic shared parent, so this is a
    // reorder rather than a re-parent.
    let _ = session.handle_drag(DragEvent::SectionDragStart { section: a.clone() });
    let status = session.handle_drag(DragEvent::DropOnSection { target: c.clone() });
    assert_eq!(status, Some(EditStatus::Applied));

    assert_eq!(session.tree().roots(), &[b, c, a]);
    assert_integrity(session.tree());
}

#[tokio::test]
async fn drop_outside_promotes_to_root() {
    let (mut session, _sink) = session_with(Arc::new(MemoryStore::new()));
    let a = session.add_section(SectionDraft::new("A", "")).unwrap();
    let c = session.add_category(&a, SectionDraft::new("C", "")).unwrap();
    let e = session.add_category(&c, SectionDraft::new("E", "")).unwrap();

    let _ = session.handle_drag(DragEvent::SectionDragStart { section: e.clone() });
    let status = session.handle_drag(DragEvent::DropOutside);
    assert_eq!(status, Some(EditStatus::Applied));

    assert_eq!(session.tree().roots(), &[a, e.clone()]);
    assert_eq!(session.tree().get(&e).unwrap().parent(), None);
    assert!(session.tree().get(&c).unwrap().children().is_empty());
    assert_integrity(session.tree());
}
