//! nattr Query
//!
//! Read operations over nested attribute paths.
//!
//! Responsibilities:
//! - Read a value, substituting a caller-chosen default on absence
//! - Existence checks that collapse every resolution failure to `false`
//! - Expansion of pattern paths into every concrete match
//!
//! Reads never fail on the shape of the data. The only error a read can
//! return is a malformed path.
//!
//! # Module Structure
//!
//! - `lookup` - The `Lookup` result of a read
//! - `read` - `get`, `get_or_null`, `exists`
//! - `find` - `find_all`, `exists_any`

mod find;
mod lookup;
mod read;

pub use find::{exists_any, find_all};
pub use lookup::Lookup;
pub use read::{exists, get, get_or_null};
