//! Object-like values.
//!
//! An `Object` is a record with a type name and a dynamic attribute store.
//! Field names and store keys are interchangeable: reading field `x` is
//! reading key `x` of the store, and assigning an absent field creates it.

use crate::{Container, Map, Value};

/// A named-field record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    /// Type name, used for display and error messages.
    class: String,
    /// Attribute values in declaration order.
    attributes: Map,
}

impl Object {
    /// Create an object with no attributes.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            attributes: Map::new(),
        }
    }

    /// Create an object over an existing attribute store.
    pub fn with_attributes(class: impl Into<String>, attributes: Map) -> Self {
        Self {
            class: class.into(),
            attributes,
        }
    }

    /// Builder-style attribute declaration.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn get_attr_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attributes.get_mut(name)
    }

    /// Set an attribute value, creating the attribute if needed.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The attribute store.
    pub fn attributes(&self) -> &Map {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Map {
        &mut self.attributes
    }

    pub fn into_attributes(self) -> Map {
        self.attributes
    }
}

impl Container<Value> for Object {
    fn keys(&self) -> Vec<&str> {
        self.attributes.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.get_attr(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_attr_mut(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.set_attr(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.remove_attr(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.has_attr(key)
    }

    fn len(&self) -> usize {
        self.attributes.len()
    }
}
