//! Plain-text find with wrap-around.
//!
//! The caller owns the search cursor, so several views over one document
//! can search independently.

use tracing::debug;

use crate::{Span, TextBuffer};

/// Search cursor for repeated "find next" over a buffer.
///
/// ```rust
/// use yomiscan::{TextBuffer, TextSearch};
///
/// let text = TextBuffer::from("猫と猫");
/// let mut search = TextSearch::new();
///
/// assert_eq!(search.find_next(&text, "猫").map(|s| s.start), Some(0));
/// assert_eq!(search.find_next(&text, "猫").map(|s| s.start), Some(2));
/// assert_eq!(search.find_next(&text, "猫").map(|s| s.start), Some(0)); // wrapped
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    position: usize,
    query: Option<String>,
}

impl TextSearch {
    /// Start searching from the beginning of the buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            query: None,
        }
    }

    /// Start searching from `position`.
    #[must_use]
    pub const fn starting_at(position: usize) -> Self {
        Self {
            position,
            query: None,
        }
    }

    /// Where the next search begins.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The most recent needle, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Find `needle` at or after the cursor, wrapping to the start once.
    ///
    /// On a hit the cursor moves to the end of the match. On a miss the
    /// cursor is reset to 0.
    pub fn find_next(&mut self, text: &TextBuffer, needle: &str) -> Option<Span> {
        self.query = Some(needle.to_string());
        let needle: Vec<char> = needle.chars().collect();
        let haystack = text.as_chars();

        if let Some(span) = find_from(haystack, &needle, self.position) {
            self.position = span.end;
            return Some(span);
        }

        let wrap = self.position != 0;
        self.position = 0;
        if !wrap {
            return None;
        }

        debug!("search wrapped to start of buffer");
        let span = find_from(haystack, &needle, 0)?;
        self.position = span.end;
        Some(span)
    }

    /// Repeat the last search.
    pub fn find_again(&mut self, text: &TextBuffer) -> Option<Span> {
        let needle = self.query.clone()?;
        self.find_next(text, &needle)
    }
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<Span> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|candidate| candidate == needle)
        .map(|i| Span::new(from + i, from + i + needle.len()))
}
