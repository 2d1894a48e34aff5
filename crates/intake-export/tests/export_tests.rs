//! Export shape and counting rules.

use chrono::Utc;
use intake_export::{assemble_configuration, ExportContext, ViewMode, ViewPrefs};
use intake_model::{FieldDraft, FieldType, Section, SectionId, SectionTree, TemplateId};
use pretty_assertions::assert_eq;

fn field(name: &str) -> intake_model::Field {
    FieldDraft::new(name, FieldType::Text).into_field().unwrap()
}

fn ctx<'a>(template_id: Option<&'a TemplateId>) -> ExportContext<'a> {
    ExportContext {
        template_id,
        template_name: "Cardiology Intake",
        last_modified: Utc::now(),
        source: "template-editor",
    }
}

/// Root with a field, a child category with a field, and a grandchild
/// with a field. Only the first two levels count.
fn two_level_tree() -> SectionTree {
    let mut root = Section::with_id(SectionId::new("root"), "Root", "");
    let mut child = Section::with_id(SectionId::new("child"), "Child", "");
    let mut grandchild = Section::with_id(SectionId::new("grand"), "Grand", "");
    grandchild.fields.push(field("too-deep"));
    child.fields.push(field("counted-child"));
    child.children.push(grandchild);
    root.fields.push(field("counted-root"));
    root.children.push(child);
    SectionTree::from_sections(vec![root]).unwrap()
}

#[test]
fn totals_count_two_levels_only() {
    let tree = two_level_tree();
    let doc = assemble_configuration(&tree, &ViewPrefs::default(), &ctx(None));
    assert_eq!(doc.metadata.total_sections, 1);
    assert_eq!(doc.metadata.total_fields, 2);
}

#[test]
fn document_carries_prefs_and_binding() {
    let tree = two_level_tree();
    let id = TemplateId::new("t-42");
    let prefs = ViewPrefs {
        view_mode: ViewMode::Bullets,
        show_hpi_bullets: false,
        show_headers: true,
    };
    let doc = assemble_configuration(&tree, &prefs, &ctx(Some(&id)));
    assert_eq!(doc.view_mode, ViewMode::Bullets);
    assert!(!doc.show_hpi_bullets);
    assert_eq!(doc.template_id.as_deref(), Some("t-42"));
    assert_eq!(doc.template_name, "Cardiology Intake");
    assert_eq!(doc.sections, tree.to_sections());
}

#[test]
fn wire_names_are_pinned() {
    let tree = two_level_tree();
    let doc = assemble_configuration(&tree, &ViewPrefs::default(), &ctx(None));
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["viewMode"], "paragraph");
    assert_eq!(value["showHPIBullets"], true);
    assert_eq!(value["showHeaders"], true);
    assert!(value.get("templateId").is_none());
    assert!(value["generatedAt"].is_string());
    assert_eq!(value["metadata"]["totalSections"], 1);
    assert_eq!(value["metadata"]["totalFields"], 2);
    assert_eq!(value["metadata"]["configurationSource"], "template-editor");
    assert!(value["metadata"]["lastModified"].is_string());
}

#[test]
fn assembly_does_not_mutate_the_tree() {
    let tree = two_level_tree();
    let before = tree.clone();
    let _ = assemble_configuration(&tree, &ViewPrefs::default(), &ctx(None));
    assert_eq!(tree, before);
}
