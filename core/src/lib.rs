//! nattr Core Types
//!
//! This crate provides the foundational types used throughout nattr:
//! - The `Value` tree (scalars, lists, mappings and objects)
//! - `Object`, a named-field record with a dynamic attribute store
//! - The container adapter (`Shape`, `Container`, `Tree`) that lets the
//!   resolver treat mappings and objects alike
//! - The `Ignore` sentinel and `Fallback` defaults

mod ignore;
#[cfg(feature = "json")]
mod json;
mod object;
mod shape;
mod value;

pub use ignore::*;
pub use object::*;
pub use shape::*;
pub use value::*;
