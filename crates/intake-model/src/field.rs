//! Typed fields attached to sections
//!
//! A [`Field`] is a leaf input slot on a section: a name, a data type
//! and a handful of presentation attributes. Fields have no children.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The input type a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Numeric input
    Number,
    /// Date picker
    Date,
    /// Multi-line text area
    Textarea,
    /// Boolean checkbox
    Checkbox,
    /// Single-choice dropdown
    Dropdown,
}

/// A single typed input slot on a section
///
/// Identity is by position within the owning section's field list when
/// `id` is absent (legacy records), otherwise by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Optional stable id; legacy fields are identified by list position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, non-empty
    pub name: String,
    /// Optional helper text shown next to the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input type
    pub data_type: FieldType,
    /// Optional maximum length, a numeric string or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Whether the field must be filled in
    #[serde(default)]
    pub required: bool,
}

/// Validated record collected by the field dialog
///
/// The dialog hands the core a `FieldDraft`; [`FieldDraft::into_field`]
/// rejects it before any tree mutation when the name is empty or the
/// length is not numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    /// Display name
    pub name: String,
    /// Optional helper text
    pub description: Option<String>,
    /// Input type
    pub data_type: FieldType,
    /// Optional maximum length
    pub length: Option<String>,
    /// Whether the field is required
    pub required: bool,
}

impl FieldDraft {
    /// Create a draft with just a name and type
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: FieldType) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_type,
            length: None,
            required: false,
        }
    }

    /// Mark the draft required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Check the draft without consuming it
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "field name" });
        }
        if let Some(length) = &self.length {
            if !length.is_empty() && !length.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::NonNumericLength {
                    value: length.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate and build a [`Field`] with a fresh id
    pub fn into_field(self) -> Result<Field, ValidationError> {
        self.validate()?;
        Ok(Field {
            id: Some(Uuid::new_v4().to_string()),
            name: self.name,
            description: self.description,
            data_type: self.data_type,
            length: self.length,
            required: self.required,
        })
    }
}
