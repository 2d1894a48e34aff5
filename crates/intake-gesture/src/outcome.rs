//! Decided gesture outcomes
//!
//! A drop resolves to at most one [`GestureOutcome`], the single
//! mutator call the gesture stands for. Deciding (read-only, against
//! the live tree) and applying (mutating) are separate steps so the
//! state machine is testable without a rendering surface.

use intake_model::{EditStatus, ParentSlot, SectionId, SectionTree};

/// The single mutation a completed gesture maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Splice a section within its sibling list
    ReorderSections {
        /// The shared sibling list
        parent: ParentSlot,
        /// Index of the dragged section
        from: usize,
        /// Index of the drop target, pre-removal frame
        to: usize,
    },
    /// Detach a section and append it under a new parent
    ReparentSection {
        /// The dragged section
        dragged: SectionId,
        /// Its new parent
        new_parent: SectionId,
    },
    /// Detach a section and append it to the top-level list
    PromoteSection {
        /// The dragged section
        dragged: SectionId,
    },
    /// Reorder within one section's field list
    MoveFieldWithin {
        /// The owning section
        section: SectionId,
        /// Index of the dragged field
        from: usize,
        /// Destination slot, pre-removal frame
        to: usize,
    },
    /// Cut a field from one section and paste it into another
    MoveFieldAcross {
        /// Section the field leaves
        source: SectionId,
        /// Index of the field in the source list
        field_index: usize,
        /// Section the field joins
        target: SectionId,
        /// Destination slot, `None` for end of list
        target_index: Option<usize>,
    },
}

impl GestureOutcome {
    /// Perform the decided mutation on the live tree
    pub fn apply(&self, tree: &mut SectionTree) -> EditStatus {
        match self {
            Self::ReorderSections { parent, from, to } => tree.reorder_siblings(parent, *from, *to),
            Self::ReparentSection {
                dragged,
                new_parent,
            } => tree.move_under(dragged, ParentSlot::Node(new_parent.clone())),
            Self::PromoteSection { dragged } => tree.move_under(dragged, ParentSlot::Root),
            Self::MoveFieldWithin { section, from, to } => {
                tree.move_field_within(section, *from, *to)
            }
            Self::MoveFieldAcross {
                source,
                field_index,
                target,
                target_index,
            } => tree.move_field_across(source, *field_index, target, *target_index),
        }
    }
}
