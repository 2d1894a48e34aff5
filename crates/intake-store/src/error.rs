//! Store failure taxonomy
//!
//! Transport failures degrade persistence, never editing: callers fall
//! back to samples for reads and surface write failures to the user
//! without touching the in-memory tree.

use intake_model::TemplateId;

/// A persistence call failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Network or backend failure
    #[error("transport failure: {message}")]
    Transport {
        /// Human-readable cause
        message: String,
    },

    /// The template does not exist in the store
    #[error("template not found: {id}")]
    NotFound {
        /// The missing id
        id: TemplateId,
    },
}

impl StoreError {
    /// Build a transport failure
    #[inline]
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
