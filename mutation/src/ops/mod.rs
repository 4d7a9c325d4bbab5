//! Mutation operation implementations.
//!
//! Each operation is implemented in its own module. All of them resolve
//! through `nattr-resolver`, so they agree on missing keys, pattern
//! selection and leaves in the way.

mod delete;
mod fanout;
mod mutate;
mod set;
mod update;

pub use delete::delete;
pub use fanout::{delete_all, set_all, update_all};
pub use mutate::mutate;
pub use set::set;
pub use update::update;
