//! Resolution error types.

use nattr_parser::{ParseError, Path};
use thiserror::Error;

/// Result type for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised by write-mode resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Malformed(#[from] ParseError),

    #[error("Key not found: '{segment}' at position {index} of '{path}'")]
    KeyNotFound {
        path: String,
        index: usize,
        segment: String,
    },

    #[error("Not traversable: {type_name} at position {index} of '{path}' cannot hold '{segment}'")]
    NotTraversable {
        path: String,
        index: usize,
        segment: String,
        type_name: String,
    },

    #[error("Intermediate missing: '{segment}' at position {index} of '{path}'")]
    IntermediateMissing {
        path: String,
        index: usize,
        segment: String,
    },
}

impl ResolveError {
    pub fn key_not_found(path: impl Into<String>, index: usize, segment: impl Into<String>) -> Self {
        Self::KeyNotFound {
            path: path.into(),
            index,
            segment: segment.into(),
        }
    }

    pub fn not_traversable(
        path: impl Into<String>,
        index: usize,
        segment: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::NotTraversable {
            path: path.into(),
            index,
            segment: segment.into(),
            type_name: type_name.into(),
        }
    }

    pub fn intermediate_missing(
        path: impl Into<String>,
        index: usize,
        segment: impl Into<String>,
    ) -> Self {
        Self::IntermediateMissing {
            path: path.into(),
            index,
            segment: segment.into(),
        }
    }

    /// Segment position the failure is tied to.
    pub fn index(&self) -> Option<usize> {
        match self {
            ResolveError::Malformed(e) => e.index(),
            ResolveError::KeyNotFound { index, .. }
            | ResolveError::NotTraversable { index, .. }
            | ResolveError::IntermediateMissing { index, .. } => Some(*index),
        }
    }
}

/// Why a read-mode walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissKind {
    /// No key at this level matched the segment.
    KeyNotFound,
    /// The value at this level is a leaf.
    NotTraversable,
}

/// Where and why a read-mode walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    /// Position of the segment that failed.
    pub index: usize,
    /// The segment as written.
    pub segment: String,
    pub kind: MissKind,
    /// Type of the value the segment was applied to.
    pub type_name: &'static str,
}

impl Miss {
    pub fn key_not_found(index: usize, segment: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            index,
            segment: segment.into(),
            kind: MissKind::KeyNotFound,
            type_name,
        }
    }

    pub fn not_traversable(index: usize, segment: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            index,
            segment: segment.into(),
            kind: MissKind::NotTraversable,
            type_name,
        }
    }

    /// Turn a read-mode miss into the matching error for `path`.
    pub fn into_error(self, path: &Path) -> ResolveError {
        match self.kind {
            MissKind::KeyNotFound => ResolveError::key_not_found(path.as_str(), self.index, self.segment),
            MissKind::NotTraversable => ResolveError::not_traversable(
                path.as_str(),
                self.index,
                self.segment,
                self.type_name,
            ),
        }
    }
}
