//! nattr
//!
//! Address values inside nested trees of mappings and objects with a single
//! dotted path such as `"b.c.d"`, and read, write, mutate, merge or delete
//! them in place.
//!
//! ```
//! use nattr::prelude::*;
//!
//! let mut tree = Value::Map(map! {
//!     "b" => Object::new("B").with_attr("c", map! { "d" => 1i64 }),
//! });
//!
//! assert_eq!(get(&tree, "b.c.d", Ignore).unwrap(), Lookup::Found(&Value::Int(1)));
//!
//! set(&mut tree, "b.c.e", 2i64, false).unwrap();
//! delete(&mut tree, "b.c.d", false).unwrap();
//! assert!(!exists(&tree, "b.c.d").unwrap());
//! assert!(exists(&tree, "b.c.e").unwrap());
//! ```
//!
//! # Crate Structure
//!
//! - `nattr-core` - `Value`, `Object`, the container adapter and `Ignore`
//! - `nattr-parser` - Path parsing
//! - `nattr-resolver` - The shared walking algorithm
//! - `nattr-query` - Reads
//! - `nattr-mutation` - Writes
//! - `nattr-populate` - Product population

mod accessor;
mod config;

pub use accessor::Accessor;
pub use config::AccessConfig;

pub use nattr_core::{map, Container, Fallback, Ignore, Map, Object, Shape, Tree, Value};
pub use nattr_mutation::{
    delete, delete_all, mutate, set, set_all, update, update_all, MutationError, MutationOutcome,
    MutationResult, Mutator,
};
pub use nattr_parser::{AsPath, ParseError, ParseResult, Path, PathMode, Pattern, Segment};
pub use nattr_populate::{populate_product, product_paths, PopulateError, PopulateResult};
pub use nattr_query::{exists, exists_any, find_all, get, get_or_null, Lookup};
pub use nattr_resolver::{Match, ResolveError};

/// `serde_json::Value`, addressable like any other tree.
#[cfg(feature = "json")]
pub type Json = serde_json::Value;

/// Everything needed for everyday use.
pub mod prelude {
    pub use crate::{
        delete, exists, get, get_or_null, map, mutate, set, update, AccessConfig, Accessor,
        Fallback, Ignore, Lookup, Map, MutationOutcome, Mutator, Object, Path, PathMode, Value,
    };
}
