//! Intake Editor Core
//!
//! The session orchestrator tying the model, gesture, export, and
//! store layers together.
//!
//! # Core Concepts
//!
//! - [`EditorSession`]: owns the live tree, drag controller, and view
//!   flags; every edit and gesture flows through it
//! - [`SessionConfig`]: ambient knobs (sample fallback, provenance)
//! - [`NotificationSink`]: where outcomes are reported; toasts are an
//!   external collaborator
//! - [`EditorError`]: the aggregated failure surface
//!
//! The in-memory tree is the source of truth during a session: store
//! failures degrade persistence, never editing.

mod config;
mod error;
mod notify;
mod session;

pub use config::SessionConfig;
pub use error::EditorError;
pub use notify::{Notice, NoticeLevel, NotificationSink, RecordingSink, TracingSink};
pub use session::EditorSession;
