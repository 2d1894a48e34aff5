//! The exported configuration document shape

use chrono::{DateTime, Utc};
use intake_model::Section;
use serde::{Deserialize, Serialize};

/// How the assembled form is rendered downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Narrative paragraph layout
    Paragraph,
    /// Bulleted layout
    Bullets,
}

/// View flags travelling from the editor session into the assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPrefs {
    /// Rendering mode
    pub view_mode: ViewMode,
    /// Whether HPI bullet summaries are shown
    pub show_hpi_bullets: bool,
    /// Whether section headers are shown
    pub show_headers: bool,
}

impl Default for ViewPrefs {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Paragraph,
            show_hpi_bullets: true,
            show_headers: true,
        }
    }
}

/// Counters and provenance attached to every exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMetadata {
    /// Number of top-level sections
    pub total_sections: usize,
    /// Fields across all top-level sections and their immediate
    /// children; deeper descendants are not counted
    pub total_fields: usize,
    /// When the tree was last edited
    pub last_modified: DateTime<Utc>,
    /// Label identifying what produced this document
    pub configuration_source: String,
}

/// The exported configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Rendering mode
    pub view_mode: ViewMode,
    /// Whether HPI bullet summaries are shown
    #[serde(rename = "showHPIBullets")]
    pub show_hpi_bullets: bool,
    /// Whether section headers are shown
    pub show_headers: bool,
    /// The section forest in nested wire form
    pub sections: Vec<Section>,
    /// When this document was assembled
    pub generated_at: DateTime<Utc>,
    /// Assembler version
    pub version: String,
    /// Id of the owning template, absent for unsaved work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Name of the owning template
    pub template_name: String,
    /// Counters and provenance
    pub metadata: ConfigMetadata,
}
