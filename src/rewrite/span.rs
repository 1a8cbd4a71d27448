//! Byte spans within a buffer

use std::ops::Range;

/// A span of bytes (start inclusive, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains another
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Express this span relative to the start of `outer`
    #[must_use]
    pub const fn relative_to(&self, outer: &Self) -> Self {
        Self::new(self.start - outer.start, self.end - outer.start)
    }

    /// The span as a range, for slicing
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
