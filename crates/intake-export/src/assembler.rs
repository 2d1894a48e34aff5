//! Assembles the configuration snapshot from the live tree
//!
//! A pure projection: reads the forest, counts, and stamps metadata.
//! Never mutates the tree.

use chrono::{DateTime, Utc};
use intake_model::{Section, SectionTree, TemplateId};
use tracing::debug;

use crate::document::{ConfigDocument, ConfigMetadata, ViewPrefs};

/// Identity and provenance of the document being assembled
#[derive(Debug, Clone)]
pub struct ExportContext<'a> {
    /// Owning template id, if the tree has been saved
    pub template_id: Option<&'a TemplateId>,
    /// Owning template name
    pub template_name: &'a str,
    /// When the tree was last edited
    pub last_modified: DateTime<Utc>,
    /// Label identifying the producer, e.g. `"template-editor"`
    pub source: &'a str,
}

/// Fields on each top-level section plus its immediate children.
/// Deeper descendants are intentionally not counted.
fn count_fields(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|section| {
            section.fields.len()
                + section
                    .children
                    .iter()
                    .map(|child| child.fields.len())
                    .sum::<usize>()
        })
        .sum()
}

/// Compose the current tree and view flags into a configuration
/// document
#[must_use]
pub fn assemble_configuration(
    tree: &SectionTree,
    prefs: &ViewPrefs,
    ctx: &ExportContext<'_>,
) -> ConfigDocument {
    let sections = tree.to_sections();
    let total_sections = sections.len();
    let total_fields = count_fields(&sections);
    debug!(total_sections, total_fields, "configuration assembled");

    ConfigDocument {
        view_mode: prefs.view_mode,
        show_hpi_bullets: prefs.show_hpi_bullets,
        show_headers: prefs.show_headers,
        sections,
        generated_at: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        template_id: ctx.template_id.map(|id| id.as_str().to_string()),
        template_name: ctx.template_name.to_string(),
        metadata: ConfigMetadata {
            total_sections,
            total_fields,
            last_modified: ctx.last_modified,
            configuration_source: ctx.source.to_string(),
        },
    }
}
