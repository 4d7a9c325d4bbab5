//! Configuration for an [`Accessor`](crate::Accessor).

use nattr_parser::PathMode;

/// Per-accessor path and writer policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessConfig {
    /// How path strings are parsed.
    pub mode: PathMode,
    /// Writers create absent literal intermediates as empty mappings.
    pub make_missing: bool,
    /// Deleting an absent path succeeds as a no-op.
    pub allow_missing: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            mode: PathMode::Literal,
            make_missing: false,
            allow_missing: false,
        }
    }
}

impl AccessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: PathMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse every segment as a pattern.
    pub fn with_regex(self, regex: bool) -> Self {
        self.with_mode(regex.into())
    }

    pub fn with_make_missing(mut self, make_missing: bool) -> Self {
        self.make_missing = make_missing;
        self
    }

    pub fn with_allow_missing(mut self, allow_missing: bool) -> Self {
        self.allow_missing = allow_missing;
        self
    }

    /// Writers build whatever is missing and deletes tolerate absence.
    pub fn lenient() -> Self {
        Self {
            mode: PathMode::Literal,
            make_missing: true,
            allow_missing: true,
        }
    }

    /// Pattern paths with strict writers.
    pub fn regex() -> Self {
        Self::default().with_mode(PathMode::Regex)
    }
}
