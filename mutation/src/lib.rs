//! nattr Mutation
//!
//! Write operations over nested attribute paths (set/mutate/update/delete).
//!
//! Responsibilities:
//! - Plan every write read-only so a failing writer leaves the tree untouched
//! - Create missing intermediates on request
//! - Apply value-returning or in-place mutators
//! - Shallow merge into mapping-like and object targets
//! - Fan-out variants that touch every match of a pattern path
//!
//! # Module Structure
//!
//! - `ops/` - Individual operation implementations (set, mutate, update, delete, fanout)
//! - `mutator` - The caller-declared mutation kind
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod mutator;
mod ops;
mod result;

pub use error::{MutationError, MutationResult};
pub use mutator::Mutator;
pub use ops::{delete, delete_all, mutate, set, set_all, update, update_all};
pub use result::MutationOutcome;
