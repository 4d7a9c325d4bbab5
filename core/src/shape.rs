//! Container adapter.
//!
//! Every value met during a walk is classified into exactly one [`Shape`].
//! Mapping-like and object-like values both expose the same [`Container`]
//! capability set over string keys; an object's attribute store is just one
//! more container. Leaves expose nothing, and descending into one fails.

use std::fmt;

/// Capability class of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Keyed container (insert/remove/iterate keys).
    Mapping,
    /// Record with named fields backed by an attribute store.
    Object,
    /// Anything else: scalars, sequences, opaque values.
    Leaf,
}

impl Shape {
    /// Classify a value.
    pub fn of<V: Tree>(value: &V) -> Shape {
        value.shape()
    }

    /// Returns true if values of this shape can hold children.
    pub fn is_container(self) -> bool {
        !matches!(self, Shape::Leaf)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Mapping => write!(f, "mapping"),
            Shape::Object => write!(f, "object"),
            Shape::Leaf => write!(f, "leaf"),
        }
    }
}

/// Uniform keyed access over mapping-like and object-like values.
///
/// `keys` yields the container's natural order: insertion order for
/// mappings, attribute order for objects. Pattern segments pick the first
/// matching key in this order.
pub trait Container<V> {
    /// Keys in natural order.
    fn keys(&self) -> Vec<&str>;

    /// Look up a child.
    fn get(&self, key: &str) -> Option<&V>;

    /// Look up a child for mutation.
    fn get_mut(&mut self, key: &str) -> Option<&mut V>;

    /// Insert or overwrite a child, returning the previous value.
    /// Absent keys (and absent object fields) are created.
    fn insert(&mut self, key: String, value: V) -> Option<V>;

    /// Remove a child, keeping the order of the remaining keys.
    fn remove(&mut self, key: &str) -> Option<V>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A value type that can be addressed by paths.
///
/// Implementors must keep `shape` and the container accessors consistent:
/// `as_container` returns `Some` exactly when `shape()` is not
/// [`Shape::Leaf`].
pub trait Tree: Clone + fmt::Debug + Sized {
    fn shape(&self) -> Shape;

    fn as_container(&self) -> Option<&dyn Container<Self>>;

    fn as_container_mut(&mut self) -> Option<&mut dyn Container<Self>>;

    /// Fresh mapping used for synthesized intermediates.
    fn empty_mapping() -> Self;

    /// The domain's null value, the default `default`.
    fn null() -> Self;

    /// Short type label for error messages.
    fn type_name(&self) -> &'static str;
}
