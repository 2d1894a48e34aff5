//! Error types for the intake model
//!
//! Two distinct failure families live here:
//! - [`ValidationError`]: dialog input rejected before any tree mutation
//! - [`TreeError`]: a forest failed a construction-time or integrity check
//!
//! Structural misses (operation target not found) are deliberately NOT
//! errors. Mutators report them through [`crate::EditStatus`] and leave
//! the tree unchanged, since drag events routinely race against fast
//! successive tree updates.

use crate::section::SectionId;

/// Invalid dialog input, rejected before any mutation happens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text input was empty
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending input
        field: &'static str,
    },

    /// Field length must be a numeric string (or empty)
    #[error("length must be numeric, got {value:?}")]
    NonNumericLength {
        /// The rejected value
        value: String,
    },
}

/// A forest violated the tree invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The same id appears more than once across the forest
    #[error("duplicate section id: {id}")]
    DuplicateId {
        /// The colliding id
        id: SectionId,
    },

    /// A child list references an id with no node in the table
    #[error("dangling child {child} under {parent}")]
    DanglingChild {
        /// Owner of the broken child list
        parent: SectionId,
        /// The unresolved child id
        child: SectionId,
    },

    /// A node's parent link disagrees with child-list containment
    #[error("parent link mismatch for {id}")]
    ParentMismatch {
        /// The inconsistent node
        id: SectionId,
    },

    /// A node exists in the table but is not reachable from the roots
    #[error("unreachable section: {id}")]
    Unreachable {
        /// The orphaned node
        id: SectionId,
    },

    /// A node was reached twice while walking from the roots
    #[error("cycle or shared subtree at {id}")]
    Cycle {
        /// The node reached twice
        id: SectionId,
    },
}
