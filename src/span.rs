//! The Span type: a pair of codepoint offsets into a text buffer.

use serde::Serialize;

/// A half-open range of codepoint offsets into a [`TextBuffer`](crate::TextBuffer).
///
/// Sentence boundaries and selections are both spans. They are derived per
/// query and never stored by the scanner.
///
/// ## Codepoint Offsets
///
/// `start` and `end` count Unicode scalar values, not bytes. That is what a
/// text widget cursor reports, and it keeps every offset on a character
/// boundary:
///
/// ```rust
/// use yomiscan::{Span, TextBuffer};
///
/// let text = TextBuffer::from("日本語の本");
/// let span = Span::new(0, 3);
///
/// assert_eq!(text.slice(span.range()), "日本語");
/// ```
///
/// A zero-length span is a caret with nothing highlighted:
///
/// ```text
/// Text:      "hello world"
/// Selection: [0..5)  "hello"
/// No match:  [0..0)  caret at 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Offset of the first codepoint in the span.
    pub start: usize,
    /// Offset one past the last codepoint (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// A zero-length span at `offset`.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Number of codepoints covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the span.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The span as a range, for slicing.
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_empty() {
        let span = Span::caret(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(7));
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = Span::new(2, 4);
        assert!(span.contains(2));
        assert!(span.contains(3));
        assert!(!span.contains(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(1, 5).to_string(), "[1..5)");
    }

    #[test]
    #[should_panic]
    fn test_inverted_span_panics() {
        let _ = Span::new(5, 1);
    }
}
