//! Intake Configuration Export
//!
//! Projects the live section tree plus view flags into the exported
//! configuration document.
//!
//! # Core Concepts
//!
//! - [`ConfigDocument`]: the stable exported snapshot shape
//! - [`ViewPrefs`] and [`ViewMode`]: rendering flags carried through
//! - [`assemble_configuration`]: the pure projection, no tree mutation

mod assembler;
mod document;

pub use assembler::{assemble_configuration, ExportContext};
pub use document::{ConfigDocument, ConfigMetadata, ViewMode, ViewPrefs};
