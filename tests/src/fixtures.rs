//! Reusable starting trees.

use nattr::{map, Object, Value};
use serde_json::json;

/// A mapping holding an object holding a mapping, plus a few leaves:
///
/// ```text
/// { "b": B { "c": { "d": 1 } }, "name": "root", "tags": ["x", "y"] }
/// ```
pub fn document() -> Value {
    Value::Map(map! {
        "b" => Object::new("B").with_attr("c", map! { "d" => 1i64 }),
        "name" => "root",
        "tags" => vec![Value::from("x"), Value::from("y")],
    })
}

/// Three animals keyed `cat_1`, `dog_1`, `cat_2`, in that order.
pub fn shelter() -> Value {
    Value::Map(map! {
        "cat_1" => Object::new("Cat").with_attr("name", "Tom").with_attr("age", 3i64),
        "dog_1" => Object::new("Dog").with_attr("name", "Rex").with_attr("age", 5i64),
        "cat_2" => Object::new("Cat").with_attr("name", "Kit").with_attr("age", 1i64),
    })
}

/// A JSON configuration document.
pub fn json_document() -> serde_json::Value {
    json!({
        "server": {
            "host": "localhost",
            "port": 8080,
            "tls": { "enabled": false }
        },
        "workers": 4,
        "features": ["a", "b"]
    })
}
