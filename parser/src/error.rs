//! Parser error types.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A malformed path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed path: path is empty")]
    Empty,

    #[error("Malformed path: empty segment at position {index} in '{path}'")]
    EmptySegment { path: String, index: usize },

    #[error("Malformed path: invalid pattern '{segment}' at position {index}: {message}")]
    InvalidPattern {
        segment: String,
        index: usize,
        message: String,
    },
}

impl ParseError {
    pub fn empty_segment(path: impl Into<String>, index: usize) -> Self {
        Self::EmptySegment {
            path: path.into(),
            index,
        }
    }

    pub fn invalid_pattern(
        segment: impl Into<String>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            segment: segment.into(),
            index,
            message: message.into(),
        }
    }

    /// Position of the offending segment, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::EmptySegment { index, .. } | ParseError::InvalidPattern { index, .. } => {
                Some(*index)
            }
        }
    }
}
