//! `serde_json::Value` support.
//!
//! JSON documents are addressable directly: JSON objects are mapping-like,
//! everything else is a leaf. Conversions to and from [`Value`] let a
//! document and an object graph share one tree. Converting an [`Object`]
//! to JSON keeps its attributes and drops the type name.

use crate::{Container, Fallback, Map, Object, Shape, Tree, Value};
use serde_json::{Map as JsonMap, Number, Value as Json};

impl Container<Json> for JsonMap<String, Json> {
    fn keys(&self) -> Vec<&str> {
        JsonMap::keys(self).map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Json> {
        JsonMap::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Json> {
        JsonMap::get_mut(self, key)
    }

    fn insert(&mut self, key: String, value: Json) -> Option<Json> {
        JsonMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &str) -> Option<Json> {
        self.shift_remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn len(&self) -> usize {
        JsonMap::len(self)
    }
}

impl Tree for Json {
    fn shape(&self) -> Shape {
        match self {
            Json::Object(_) => Shape::Mapping,
            _ => Shape::Leaf,
        }
    }

    fn as_container(&self) -> Option<&dyn Container<Self>> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container<Self>> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }

    fn empty_mapping() -> Self {
        Json::Object(JsonMap::new())
    }

    fn null() -> Self {
        Json::Null
    }

    fn type_name(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Bool(_) => "boolean",
            Json::Number(_) => "number",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
    }
}

impl From<Json> for Fallback<Json> {
    fn from(value: Json) -> Self {
        Fallback::Value(value)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64 and all non-integers land here. Such a u64
                // loses precision and comes back from `Value` as a float.
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(i) => Json::Number(i.into()),
            // Non-finite floats have no JSON form
            Value::Float(f) => Number::from_f64(f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Map(map) => Json::Object(map_to_json(map)),
            Value::Object(obj) => Json::Object(map_to_json(obj.into_attributes())),
        }
    }
}

fn map_to_json(map: Map) -> JsonMap<String, Json> {
    map.into_iter().map(|(k, v)| (k, Json::from(v))).collect()
}

impl From<Object> for Json {
    fn from(obj: Object) -> Self {
        Json::from(Value::Object(obj))
    }
}
