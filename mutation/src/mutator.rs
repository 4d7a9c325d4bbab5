//! Caller-declared mutation kind.

use std::fmt;

/// How `mutate` applies the caller's function.
///
/// The kind is always stated by the caller. A replacing function computes
/// a new value which is written back; an in-place function edits the
/// stored value through a mutable reference and nothing is written back.
pub enum Mutator<'f, V> {
    Replace(Box<dyn FnOnce(&V) -> V + 'f>),
    InPlace(Box<dyn FnOnce(&mut V) + 'f>),
}

impl<'f, V> Mutator<'f, V> {
    pub fn replace(f: impl FnOnce(&V) -> V + 'f) -> Self {
        Mutator::Replace(Box::new(f))
    }

    pub fn in_place(f: impl FnOnce(&mut V) + 'f) -> Self {
        Mutator::InPlace(Box::new(f))
    }

    pub fn is_in_place(&self) -> bool {
        matches!(self, Mutator::InPlace(_))
    }
}

impl<V> fmt::Debug for Mutator<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutator::Replace(_) => f.write_str("Mutator::Replace(..)"),
            Mutator::InPlace(_) => f.write_str("Mutator::InPlace(..)"),
        }
    }
}
