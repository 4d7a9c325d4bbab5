//! Value types for nattr trees.
//!
//! A `Value` is either a leaf (scalars and lists) or a container: a `Map`
//! (mapping-like) or an `Object` (object-like). Mixing the two freely is the
//! point: `{"b": Object { c: {"d": 1} }}` is a perfectly good tree.

use crate::{Container, Object, Shape, Tree};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered mapping from key to value.
pub type Map = IndexMap<String, Value>;

/// A node in a nattr tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// List of values. Lists are leaves: paths never index into them.
    List(Vec<Value>),
    /// Mapping-like container.
    Map(Map),
    /// Object-like container.
    Object(Object),
}

impl Value {
    /// Create an empty mapping.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Object(_) => "Object",
        }
    }
}

impl Tree for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Map(_) => Shape::Mapping,
            Value::Object(_) => Shape::Object,
            _ => Shape::Leaf,
        }
    }

    fn as_container(&self) -> Option<&dyn Container<Self>> {
        match self {
            Value::Map(map) => Some(map),
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container<Self>> {
        match self {
            Value::Map(map) => Some(map),
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    fn empty_mapping() -> Self {
        Value::map()
    }

    fn null() -> Self {
        Value::Null
    }

    fn type_name(&self) -> &'static str {
        Value::type_name(self)
    }
}

impl Container<Value> for Map {
    fn keys(&self) -> Vec<&str> {
        IndexMap::keys(self).map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        IndexMap::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        IndexMap::get_mut(self, key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                write_entries(f, map)?;
                write!(f, "}}")
            }
            Value::Object(obj) => {
                write!(f, "{} {{", obj.class())?;
                write_entries(f, obj.attributes())?;
                write!(f, "}}")
            }
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, map: &Map) -> fmt::Result {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    Ok(())
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

/// Helper macro to create ordered mappings.
#[macro_export]
macro_rules! map {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Map::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
