//! The `Ignore` sentinel.
//!
//! Passing [`Ignore`] where a default is accepted turns "the path is absent"
//! into an explicit outcome instead of substituting a concrete fallback.
//! It is its own type, so it can never be confused with a domain value,
//! `Null` included.

use crate::{Tree, Value};

/// Marker meaning "absence is a first-class result".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ignore;

/// What a reader hands back when a path does not resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<V> {
    /// Substitute this value.
    Value(V),
    /// Report absence explicitly.
    Ignore,
}

impl<V> Fallback<V> {
    pub fn is_ignore(&self) -> bool {
        matches!(self, Fallback::Ignore)
    }

    /// The substitute value, if any.
    pub fn into_value(self) -> Option<V> {
        match self {
            Fallback::Value(v) => Some(v),
            Fallback::Ignore => None,
        }
    }
}

impl<V: Tree> Fallback<V> {
    /// Fall back to the domain's null.
    pub fn null() -> Self {
        Fallback::Value(V::null())
    }
}

impl<V: Tree> Default for Fallback<V> {
    fn default() -> Self {
        Self::null()
    }
}

impl<V> From<Ignore> for Fallback<V> {
    fn from(_: Ignore) -> Self {
        Fallback::Ignore
    }
}

impl From<Value> for Fallback<Value> {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}
