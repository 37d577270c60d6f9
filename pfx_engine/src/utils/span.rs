//! Source location tracking for filter expressions
//!
//! Filter expressions are single-line strings, so a span is a plain byte
//! range into the normalized expression text. Spans are attached to clause
//! segments and carried through parse errors for precise reporting.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte range in the normalized expression text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Span {
    /// Start offset (inclusive, 0-based)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Placeholder span for tests and synthesized clauses
    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Length of the spanned text in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no text
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Slice the spanned region out of the source text.
    ///
    /// Returns an empty string if the span falls outside `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
