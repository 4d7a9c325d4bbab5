//! nattr Parser
//!
//! This crate turns path strings into parsed [`Path`]s:
//! - Splitting on `.` into literal or pattern segments
//! - Compiling pattern segments as full-match regular expressions
//! - Error handling with the offending segment position
//!
//! Dots cannot be escaped. A key that itself contains a dot is only
//! reachable through a pattern segment whose source has no `.` in it,
//! e.g. `c\Wspecial` for the key `c.special`.

mod error;
mod path;

pub use error::*;
pub use path::*;
