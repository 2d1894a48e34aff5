//! Sections and categories in wire form
//!
//! A [`Section`] is a node of the template forest as it travels over
//! the wire and as a detached subtree: it owns its fields and nests its
//! child categories directly. The live editing representation is the
//! arena in [`crate::tree`]; this nested form is what templates and
//! exported configurations carry.
//!
//! Containment in a `children` list is the single source of truth for
//! parentage. Legacy payloads carry a denormalized `parentId`; incoming
//! values are ignored on deserialization and never emitted.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::field::Field;

/// Unique id of a section or category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap an existing id string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random id
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Constant node tag carried on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// The only kind; categories are sections nested under a parent
    #[default]
    Section,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A section (or nested category) in wire form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique across the whole forest
    pub id: SectionId,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Constant `"section"` tag
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    /// Whether the section is greyed out in the editor
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Ordered input slots owned by this node
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Ordered nested categories
    #[serde(default)]
    pub children: Vec<Section>,
}

impl Section {
    /// Create an empty section with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(SectionId::generate(), name, description)
    }

    /// Create an empty section with a known id
    #[must_use]
    pub fn with_id(
        id: SectionId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            kind: SectionKind::Section,
            disabled: false,
            fields: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Validated record collected by the section dialog
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
}

impl SectionDraft {
    /// Create a draft
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check the draft without consuming it
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "section name",
            });
        }
        Ok(())
    }

    /// Validate and build an empty [`Section`] with a fresh id
    pub fn into_section(self) -> Result<Section, ValidationError> {
        self.validate()?;
        Ok(Section::new(self.name, self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_name_is_rejected() {
        assert_eq!(
            SectionDraft::new("", "desc").validate(),
            Err(ValidationError::Empty {
                field: "section name"
            })
        );
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(SectionId::generate(), SectionId::generate());
    }
}
