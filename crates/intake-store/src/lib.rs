//! Intake Template Store
//!
//! The persistence collaborator seam of the editor.
//!
//! # Core Concepts
//!
//! - [`TemplateStore`]: the async contract the editor calls
//! - [`MemoryStore`]: the in-process reference implementation
//! - [`StoreError`]: transport vs. not-found
//! - [`sample_templates`]: the fixed fallback set for degraded mode

mod error;
mod memory;
mod samples;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use samples::sample_templates;
pub use store::TemplateStore;
