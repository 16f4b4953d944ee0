//! Lookup windows and mapping matches back to selections.
//!
//! The dictionary matcher wants contiguous text, but documents are full of
//! hard line breaks. A word wrapped across two lines should still be found:
//!
//! ```text
//! Buffer:  "...読\nむ..."      cursor on 読
//! Slice:   "読\nむ..."         [P, P+W)
//! Window:  "読む..."           newlines removed, handed to the matcher
//! Match:   2                   matcher consumed "読む"
//! Select:  [P, P+3)            "読\nむ", the newline is inside the span
//! ```
//!
//! ## Mapping Back
//!
//! The matcher reports how many window codepoints it consumed. Walking the
//! original slice, every codepoint extends the selection but only
//! non-newline codepoints spend the match budget. The walk stops the moment
//! the budget is spent, so a newline right after the match is not selected.

use serde::Serialize;

use crate::text::is_newline;
use crate::{Span, TextBuffer};

/// Newline-free lookup text cut from a buffer at a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedWindow<'a> {
    start: usize,
    source: &'a [char],
    text: String,
    flat_len: usize,
}

impl FlattenedWindow<'_> {
    /// The text to hand to the matcher.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of codepoints in [`text`](Self::text).
    #[must_use]
    pub const fn flat_len(&self) -> usize {
        self.flat_len
    }

    /// Offset of the window's first codepoint in the buffer.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Buffer span of the original slice.
    #[must_use]
    pub const fn source_span(&self) -> Span {
        Span {
            start: self.start,
            end: self.start + self.source.len(),
        }
    }

    /// Selection in the buffer for a match of `matched_len` window codepoints.
    #[must_use]
    pub fn selection(&self, matched_len: usize) -> Span {
        map_match_to_span(self.source, self.start, matched_len)
    }
}

/// Cut a lookup window of up to `window_len` codepoints at `position`.
///
/// Returns `None` when no lookup should happen: the slice is empty, holds
/// only newlines, or its first non-newline codepoint is whitespace. Callers
/// should clear any selection in that case.
///
/// ```rust
/// use yomiscan::{flatten, TextBuffer};
///
/// let text = TextBuffer::from("hello\n world.");
/// let window = flatten(&text, 0, 20).unwrap();
///
/// assert_eq!(window.text(), "hello world.");
/// assert_eq!(window.selection(5).range(), 0..5);
///
/// assert!(flatten(&text, 6, 20).is_none()); // starts on a space
/// ```
pub fn flatten(text: &TextBuffer, position: usize, window_len: usize) -> Option<FlattenedWindow<'_>> {
    let chars = text.as_chars();
    let start = text.clamp(position);
    let end = start.saturating_add(window_len).min(chars.len());
    let source = &chars[start..end];

    let flat: String = source.iter().filter(|&&c| !is_newline(c)).collect();
    if flat.chars().next().map_or(true, char::is_whitespace) {
        return None;
    }

    Some(FlattenedWindow {
        start,
        source,
        flat_len: flat.chars().count(),
        text: flat,
    })
}

/// Map a match of `matched_len` flattened codepoints back onto `slice`.
///
/// `slice` is the original text starting at buffer offset `start`. Newlines
/// are stepped over and included in the span without spending the budget.
/// A zero-length match is a caret at `start`.
///
/// ```rust
/// use yomiscan::map_match_to_span;
///
/// let slice: Vec<char> = "ab\ncd".chars().collect();
/// assert_eq!(map_match_to_span(&slice, 10, 4).range(), 10..15);
/// assert_eq!(map_match_to_span(&slice, 10, 2).range(), 10..12);
/// assert!(map_match_to_span(&slice, 10, 0).is_empty());
/// ```
#[must_use]
pub fn map_match_to_span(slice: &[char], start: usize, matched_len: usize) -> Span {
    if matched_len == 0 {
        return Span::caret(start);
    }

    let mut remaining = matched_len;
    let mut consumed = 0;
    for &c in slice {
        consumed += 1;
        if !is_newline(c) {
            remaining -= 1;
        }
        if remaining == 0 {
            break;
        }
    }

    Span::new(start, start + consumed)
}

/// A window as reported to callers, detached from the buffer borrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSummary {
    /// The flattened text.
    pub text: String,
    /// Buffer span of the original slice.
    pub source: Span,
}

impl From<&FlattenedWindow<'_>> for WindowSummary {
    fn from(window: &FlattenedWindow<'_>) -> Self {
        Self {
            text: window.text.clone(),
            source: window.source_span(),
        }
    }
}
