//! Pointer events fed to the drag controller
//!
//! These are the already-dispatched editor events; hit testing against
//! the rendered surface happens outside the core.

use intake_model::SectionId;

/// One discrete pointer event during a drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Drag started on a section handle
    SectionDragStart {
        /// The grabbed section
        section: SectionId,
    },
    /// Drag started on a field handle
    ///
    /// The surface must stop propagation so the enclosing section does
    /// not also start a drag; the controller additionally ignores a
    /// section start while a field drag is active.
    FieldDragStart {
        /// Section owning the grabbed field
        section: SectionId,
        /// Index of the field in that section's list
        field_index: usize,
    },
    /// Pointer moved over a section handle
    SectionDragOver {
        /// The hovered section
        section: SectionId,
    },
    /// Pointer left a section handle
    SectionDragLeave {
        /// The departed section
        section: SectionId,
    },
    /// Pointer moved over a specific field slot
    FieldSlotDragOver {
        /// Section owning the slot
        section: SectionId,
        /// Slot index
        slot: usize,
    },
    /// Pointer left a specific field slot
    FieldSlotDragLeave {
        /// Section owning the slot
        section: SectionId,
        /// Slot index
        slot: usize,
    },
    /// Pointer moved over a section body (the end-of-section zone)
    SectionBodyDragOver {
        /// The hovered section
        section: SectionId,
    },
    /// Dropped on a section
    DropOnSection {
        /// The drop target
        target: SectionId,
    },
    /// Dropped on a specific field slot
    DropOnFieldSlot {
        /// Section owning the slot
        section: SectionId,
        /// Slot index
        slot: usize,
    },
    /// Dropped on a section body
    DropOnSectionBody {
        /// The drop target
        section: SectionId,
    },
    /// Dropped outside every section
    DropOutside,
    /// Drag ended, with or without a preceding drop
    DragEnd,
}
