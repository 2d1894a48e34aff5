//! Session-level error type
//!
//! Aggregates the failure families of the layers below. Structural
//! misses arrive here as [`EditorError::NotApplied`] carrying the
//! mutator's status; they are reported, never panicked on.

use intake_model::{EditStatus, TreeError, ValidationError};
use intake_store::StoreError;

/// Anything an editor session entry point can fail with
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Dialog input rejected before any mutation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A loaded forest violated the tree invariant
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A persistence call failed; the local tree is untouched
    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// A structural edit missed its target
    #[error("edit not applied: {status:?}")]
    NotApplied {
        /// The mutator's verdict
        status: EditStatus,
    },

    /// The operation needs a saved template binding
    #[error("no template is open")]
    NoTemplate,
}
