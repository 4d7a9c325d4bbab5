//! nattr Resolver
//!
//! Walk parsed paths against a tree. Every traversal operation goes
//! through this crate so that all of them agree on edge cases.
//!
//! Responsibilities:
//! - Select keys for literal and pattern segments (first match wins)
//! - Read-mode walks that report where and why a path stopped resolving
//! - Write-mode routes planned read-only before anything is mutated
//! - Fan-out expansion of pattern paths into every concrete match
//!
//! # Module Structure
//!
//! - `select` - Key selection for one segment against one container
//! - `walk` - Read-mode resolution (`resolve`, `descend`)
//! - `route` - Write-mode planning and opening of the terminal's parent
//! - `expand` - All concrete matches of a path
//! - `error` - Error types for resolution failures

mod error;
mod expand;
mod route;
mod select;
mod walk;

pub use error::{Miss, MissKind, ResolveError, ResolveResult};
pub use expand::{expand, Match};
pub use route::{plan, Route};
pub use select::{matching_keys, select_key};
pub use walk::{descend, descend_mut, resolve, Found};
