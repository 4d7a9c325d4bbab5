//! Mutation error types.

use nattr_parser::ParseError;
use nattr_resolver::ResolveError;
use thiserror::Error;
use tracing::debug;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during a write.
///
/// A writer that returns an error has not modified the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    MalformedPath(#[from] ParseError),

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

    #[error("Not mapping-like: {type_name} at position {index} of '{path}' cannot take a merge update")]
    NotMappingLike {
        path: String,
        index: usize,
        type_name: String,
    },
}

impl MutationError {
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

    pub fn not_mapping_like(path: impl Into<String>, index: usize, type_name: impl Into<String>) -> Self {
        Self::NotMappingLike {
            path: path.into(),
            index,
            type_name: type_name.into(),
        }
    }

    /// Segment position the failure is tied to.
    pub fn index(&self) -> Option<usize> {
        match self {
            MutationError::MalformedPath(e) => e.index(),
            MutationError::KeyNotFound { index, .. }
            | MutationError::NotTraversable { index, .. }
            | MutationError::IntermediateMissing { index, .. }
            | MutationError::NotMappingLike { index, .. } => Some(*index),
        }
    }
}

impl From<ResolveError> for MutationError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Malformed(e) => Self::MalformedPath(e),
            ResolveError::KeyNotFound {
                path,
                index,
                segment,
            } => Self::KeyNotFound {
                path,
                index,
                segment,
            },
            ResolveError::NotTraversable {
                path,
                index,
                segment,
                type_name,
            } => Self::NotTraversable {
                path,
                index,
                segment,
                type_name,
            },
            ResolveError::IntermediateMissing {
                path,
                index,
                segment,
            } => Self::IntermediateMissing {
                path,
                index,
                segment,
            },
        }
    }
}

/// Convert and log a writer failure.
pub(crate) fn failed(op: &'static str, e: impl Into<MutationError>) -> MutationError {
    let e = e.into();
    debug!(op, error = %e, "write failed");
    e
}
