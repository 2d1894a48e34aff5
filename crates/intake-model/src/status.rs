//! Explicit outcome reporting for structural mutators
//!
//! Every mutator on [`crate::SectionTree`] returns an [`EditStatus`]
//! instead of panicking or erroring on a miss. A non-applied status
//! guarantees the tree is unchanged.

/// Outcome of a single mutator call
///
/// `Applied` is the only variant that mutated the tree. All other
/// variants leave the tree exactly as it was, so callers may log the
/// miss or ignore it without compensating.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditStatus {
    /// The mutation took effect
    Applied,
    /// The target (or parent) id is not in the tree
    TargetMissing,
    /// A list index was out of range
    IndexOutOfRange,
    /// Attaching the subtree would collide with an existing id
    DuplicateId,
    /// Re-parenting would place a node under its own descendant
    WouldCycle,
}

impl EditStatus {
    /// Whether the mutation took effect
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
