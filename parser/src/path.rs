//! Path and segment types.

use crate::error::{ParseError, ParseResult};
use regex_lite::Regex;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How segments of a path string are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathMode {
    /// Every segment is a literal key.
    #[default]
    Literal,
    /// Every segment is a regular expression matched against whole keys.
    Regex,
}

impl From<bool> for PathMode {
    fn from(regex: bool) -> Self {
        if regex {
            PathMode::Regex
        } else {
            PathMode::Literal
        }
    }
}

/// A compiled pattern segment. Matches only when the whole key matches.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex_lite::Error> {
        // Must compile alone, or an unbalanced `)` could escape the anchors.
        Regex::new(source)?;
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }

    /// The pattern as written in the path.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Pattern(Pattern),
}

impl Segment {
    /// Segment text as written.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Literal(name) => name,
            Segment::Pattern(pattern) => pattern.as_str(),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Segment::Pattern(_))
    }

    /// Whether `key` is selected by this segment.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Segment::Literal(name) => name == key,
            Segment::Pattern(pattern) => pattern.is_match(key),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed path. Always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    source: String,
    mode: PathMode,
    segments: Vec<Segment>,
}

impl Path {
    /// Parse `source` in the given mode.
    pub fn parse(source: &str, mode: PathMode) -> ParseResult<Self> {
        if source.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut segments = Vec::new();
        for (index, part) in source.split('.').enumerate() {
            if part.is_empty() {
                return Err(ParseError::empty_segment(source, index));
            }
            let segment = match mode {
                PathMode::Literal => Segment::Literal(part.to_string()),
                PathMode::Regex => Segment::Pattern(
                    Pattern::new(part)
                        .map_err(|e| ParseError::invalid_pattern(part, index, e.to_string()))?,
                ),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            mode,
            segments,
        })
    }

    /// Parse with every segment taken literally.
    pub fn literal(source: &str) -> ParseResult<Self> {
        Self::parse(source, PathMode::Literal)
    }

    /// Parse with every segment compiled as a pattern.
    pub fn regex(source: &str) -> ParseResult<Self> {
        Self::parse(source, PathMode::Regex)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The terminal segment and the intermediates leading to it.
    pub fn split_last(&self) -> (&Segment, &[Segment]) {
        match self.segments.split_last() {
            Some(parts) => parts,
            None => unreachable!("paths are never empty"),
        }
    }

    pub fn has_patterns(&self) -> bool {
        self.segments.iter().any(Segment::is_pattern)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Path::literal(s)
    }
}

/// Anything an operation accepts as a path.
///
/// Strings parse in literal mode; pass a [`Path`] built with
/// [`Path::regex`] to use pattern segments.
pub trait AsPath {
    fn as_path(&self) -> ParseResult<Cow<'_, Path>>;
}

impl AsPath for Path {
    fn as_path(&self) -> ParseResult<Cow<'_, Path>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsPath for str {
    fn as_path(&self) -> ParseResult<Cow<'_, Path>> {
        Path::literal(self).map(Cow::Owned)
    }
}

impl AsPath for String {
    fn as_path(&self) -> ParseResult<Cow<'_, Path>> {
        self.as_str().as_path()
    }
}

impl<T: AsPath + ?Sized> AsPath for &T {
    fn as_path(&self) -> ParseResult<Cow<'_, Path>> {
        (**self).as_path()
    }
}
