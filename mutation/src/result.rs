//! Mutation result types.

/// Outcome of a write operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<V> {
    /// Stored a value under a key that did not exist.
    Written,
    /// Overwrote an existing value, which is handed back.
    Replaced(V),
    /// An in-place mutator modified the stored value.
    MutatedInPlace,
    /// The path was absent and the tree was left untouched.
    Skipped,
    /// Removed a value, which is handed back.
    Deleted(V),
    /// Nothing to delete and absence was allowed.
    Missing,
    /// Merged this many keys into the target.
    Merged(usize),
}

impl<V> MutationOutcome<V> {
    /// Whether the tree was changed.
    pub fn changed(&self) -> bool {
        !matches!(
            self,
            MutationOutcome::Skipped | MutationOutcome::Missing | MutationOutcome::Merged(0)
        )
    }

    /// Get the previous value if this is a Replaced result.
    pub fn previous(&self) -> Option<&V> {
        match self {
            MutationOutcome::Replaced(v) => Some(v),
            _ => None,
        }
    }

    /// Take the removed value if this is a Deleted result.
    pub fn into_removed(self) -> Option<V> {
        match self {
            MutationOutcome::Deleted(v) => Some(v),
            _ => None,
        }
    }
}
