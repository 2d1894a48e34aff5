//! Drag session state
//!
//! One short-lived value per gesture. Exactly one drag session is
//! active at a time; everything here is cleared on drop and on
//! drag-end, whichever comes first.

use intake_model::SectionId;

/// A live section drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDrag {
    /// The section being dragged
    pub dragged: SectionId,
    /// The section currently hovered as a drop target, never the
    /// dragged section itself
    pub hover: Option<SectionId>,
}

/// Where a dragged field is currently hovering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHover {
    /// The hovered section
    pub section: SectionId,
    /// A specific slot index, or `None` for the end-of-section zone
    pub slot: Option<usize>,
}

impl FieldHover {
    /// Whether this hover pins a specific slot in `section`
    #[must_use]
    pub fn is_slot_in(&self, section: &SectionId) -> bool {
        self.slot.is_some() && &self.section == section
    }
}

/// A live field drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDrag {
    /// Section the field is being dragged out of
    pub source: SectionId,
    /// Index of the field in the source section's list at drag-start
    pub field_index: usize,
    /// Current hover target
    pub hover: Option<FieldHover>,
}

/// The controller's current state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// A section is being dragged
    Section(SectionDrag),
    /// A field is being dragged
    Field(FieldDrag),
}

impl DragState {
    /// Whether no drag is in progress
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
