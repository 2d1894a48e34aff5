//! Templates owning a section forest
//!
//! A [`Template`] is the persisted unit: metadata plus one independent
//! copy of a section forest. Opening a template loads its forest into
//! the live editing tree; saving writes the live tree back.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::section::Section;

/// Unique id of a stored template, assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
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

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored intake form template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Store-assigned id
    pub id: TemplateId,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Medical domain label, e.g. "general" or "cardiology"
    #[serde(default)]
    pub domain: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// The owned section forest
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// The id-less payload for creating or updating a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Medical domain label
    #[serde(default)]
    pub domain: String,
    /// The section forest to persist
    #[serde(default)]
    pub sections: Vec<Section>,
}
