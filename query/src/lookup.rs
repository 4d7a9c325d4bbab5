//! Read results.

use nattr_core::Fallback;

/// What a read produced.
///
/// Absence is visible only when the caller asked for it with `Ignore`;
/// otherwise the default stands in for the missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a, V> {
    /// The path resolved to this value.
    Found(&'a V),
    /// The path did not resolve; this is the caller's default.
    Default(V),
    /// The path did not resolve and the default was `Ignore`.
    Ignored,
}

impl<'a, V> Lookup<'a, V> {
    /// Build the result of a failed read.
    pub fn absent(default: Fallback<V>) -> Self {
        match default {
            Fallback::Value(value) => Lookup::Default(value),
            Fallback::Ignore => Lookup::Ignored,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Lookup::Ignored)
    }

    /// The value read or substituted, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Default(value) => Some(value),
            Lookup::Ignored => None,
        }
    }
}

impl<V: Clone> Lookup<'_, V> {
    /// Take ownership of the value, cloning a found one.
    pub fn into_owned(self) -> Option<V> {
        match self {
            Lookup::Found(value) => Some(value.clone()),
            Lookup::Default(value) => Some(value),
            Lookup::Ignored => None,
        }
    }
}
