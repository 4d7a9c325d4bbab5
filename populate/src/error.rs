//! Populate error types.

use nattr_mutation::MutationError;
use thiserror::Error;

/// Result type for populate operations.
pub type PopulateResult<T> = Result<T, PopulateError>;

/// Errors that can occur while populating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulateError {
    #[error("Layer {index} has no keys")]
    EmptyLayer { index: usize },

    #[error("Cannot write leaf: {0}")]
    Write(#[from] MutationError),
}

impl PopulateError {
    pub fn empty_layer(index: usize) -> Self {
        Self::EmptyLayer { index }
    }
}
