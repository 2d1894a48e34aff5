//! Intake Editor Drag Gestures
//!
//! The interaction state machine that turns pointer events into
//! structural mutations of the section tree.
//!
//! # Core Concepts
//!
//! - [`DragController`]: owns the single active drag session
//! - [`DragState`]: idle, dragging a section, or dragging a field
//! - [`DragEvent`]: one discrete pointer event
//! - [`GestureOutcome`]: the single decided mutator call for a drop
//!
//! A gesture decides at most one outcome. Drop targets are resolved
//! against the live tree at drop time; stale ids decide nothing.
//! Drag-end clears the session unconditionally, whether or not a drop
//! handler fired.

mod controller;
mod event;
mod outcome;
mod state;

pub use controller::DragController;
pub use event::DragEvent;
pub use outcome::GestureOutcome;
pub use state::{DragState, FieldDrag, FieldHover, SectionDrag};
