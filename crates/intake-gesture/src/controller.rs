//! The drag gesture state machine
//!
//! Turns a stream of pointer events into at most one decided
//! [`GestureOutcome`] per gesture. Drop targets are resolved fresh
//! against the live tree at drop time, never cached from drag-start,
//! since drag events routinely race against fast successive tree
//! updates: a vanished id simply decides nothing.

use intake_model::{SectionId, SectionTree};
use tracing::{debug, trace};

use crate::event::DragEvent;
use crate::outcome::GestureOutcome;
use crate::state::{DragState, FieldDrag, FieldHover, SectionDrag};

/// Tracks one drag session at a time and decides its outcome
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether no drag is in progress
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Drop any in-flight session unconditionally
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Feed one pointer event; returns the decided outcome on a drop
    ///
    /// Every drop path and [`DragEvent::DragEnd`] leave the controller
    /// idle, whether or not an outcome was decided.
    pub fn handle(&mut self, event: DragEvent, tree: &SectionTree) -> Option<GestureOutcome> {
        match event {
            DragEvent::SectionDragStart { section } => {
                // Only arms from idle: a field drag already in flight
                // keeps the enclosing section from starting one too.
                if self.state.is_idle() && tree.contains(&section) {
                    trace!(%section, "section drag armed");
                    self.state = DragState::Section(SectionDrag {
                        dragged: section,
                        hover: None,
                    });
                }
                None
            }
            DragEvent::FieldDragStart {
                section,
                field_index,
            } => {
                if self.state.is_idle() && tree.contains(&section) {
                    trace!(%section, field_index, "field drag armed");
                    self.state = DragState::Field(FieldDrag {
                        source: section,
                        field_index,
                        hover: None,
                    });
                }
                None
            }
            DragEvent::SectionDragOver { section } => {
                if let DragState::Section(drag) = &mut self.state {
                    // A node is never its own drop target.
                    if section != drag.dragged {
                        drag.hover = Some(section);
                    }
                }
                None
            }
            DragEvent::SectionDragLeave { section } => {
                if let DragState::Section(drag) = &mut self.state {
                    if drag.hover.as_ref() == Some(&section) {
                        drag.hover = None;
                    }
                }
                None
            }
            DragEvent::FieldSlotDragOver { section, slot } => {
                if let DragState::Field(drag) = &mut self.state {
                    drag.hover = Some(FieldHover {
                        section,
                        slot: Some(slot),
                    });
                }
                None
            }
            DragEvent::FieldSlotDragLeave { section, slot } => {
                if let DragState::Field(drag) = &mut self.state {
                    let here = FieldHover {
                        section,
                        slot: Some(slot),
                    };
                    // Only an exact-match leave downgrades a slot hover.
                    if drag.hover.as_ref() == Some(&here) {
                        drag.hover = None;
                    }
                }
                None
            }
            DragEvent::SectionBodyDragOver { section } => {
                if let DragState::Field(drag) = &mut self.state {
                    // The coarser body hover must not overwrite a
                    // slot-level hover in the same section.
                    let slot_pinned = drag
                        .hover
                        .as_ref()
                        .is_some_and(|hover| hover.is_slot_in(&section));
                    if !slot_pinned {
                        drag.hover = Some(FieldHover {
                            section,
                            slot: None,
                        });
                    }
                }
                None
            }
            DragEvent::DropOnSection { target } => match self.take() {
                DragState::Section(drag) => decide_section_drop(&drag.dragged, &target, tree),
                DragState::Field(drag) => decide_field_drop(&drag, &target, None, tree),
                DragState::Idle => None,
            },
            DragEvent::DropOnFieldSlot { section, slot } => match self.take() {
                DragState::Field(drag) => decide_field_drop(&drag, &section, Some(slot), tree),
                _ => None,
            },
            DragEvent::DropOnSectionBody { section } => match self.take() {
                DragState::Section(drag) => decide_section_drop(&drag.dragged, &section, tree),
                DragState::Field(drag) => decide_field_drop(&drag, &section, None, tree),
                DragState::Idle => None,
            },
            DragEvent::DropOutside => match self.take() {
                DragState::Section(drag) if tree.contains(&drag.dragged) => {
                    debug!(dragged = %drag.dragged, "promote to root");
                    Some(GestureOutcome::PromoteSection {
                        dragged: drag.dragged,
                    })
                }
                _ => None,
            },
            DragEvent::DragEnd => {
                // Cancellation path: some surfaces fire drag-end with
                // no drop, and this must still clear everything.
                self.reset();
                None
            }
        }
    }

    fn take(&mut self) -> DragState {
        std::mem::take(&mut self.state)
    }
}

/// Same parent means reorder, different parent means re-parent
fn decide_section_drop(
    dragged: &SectionId,
    target: &SectionId,
    tree: &SectionTree,
) -> Option<GestureOutcome> {
    if dragged == target {
        trace!(%dragged, "self drop ignored");
        return None;
    }
    let (_, dragged_parent) = tree.get_with_parent(dragged)?;
    let (_, target_parent) = tree.get_with_parent(target)?;
    if dragged_parent == target_parent {
        let siblings = tree.siblings(&dragged_parent)?;
        let from = siblings.iter().position(|id| id == dragged)?;
        let to = siblings.iter().position(|id| id == target)?;
        debug!(%dragged, %target, from, to, "reorder decided");
        Some(GestureOutcome::ReorderSections {
            parent: dragged_parent,
            from,
            to,
        })
    } else {
        debug!(%dragged, %target, "reparent decided");
        Some(GestureOutcome::ReparentSection {
            dragged: dragged.clone(),
            new_parent: target.clone(),
        })
    }
}

/// Same section plus a specific slot is a within-list move; everything
/// else is a cut-and-paste, with `None` meaning end of the target list
fn decide_field_drop(
    drag: &FieldDrag,
    target: &SectionId,
    slot: Option<usize>,
    tree: &SectionTree,
) -> Option<GestureOutcome> {
    if !tree.contains(&drag.source) || !tree.contains(target) {
        trace!(source = %drag.source, %target, "stale field drop ignored");
        return None;
    }
    if &drag.source == target {
        if let Some(to) = slot {
            debug!(section = %target, from = drag.field_index, to, "field reorder decided");
            return Some(GestureOutcome::MoveFieldWithin {
                section: drag.source.clone(),
                from: drag.field_index,
                to,
            });
        }
    }
    debug!(source = %drag.source, %target, "field move decided");
    Some(GestureOutcome::MoveFieldAcross {
        source: drag.source.clone(),
        field_index: drag.field_index,
        target: target.clone(),
        target_index: slot,
    })
}
