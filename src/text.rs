//! Codepoint-indexed text buffer.

use std::ops::Range;

/// Whether `c` breaks a line.
///
/// Only `\n` counts. Documents with `\r\n` or `\r` line endings should go
/// through [`TextBuffer::normalize_newlines`] first, as `Scanner::decode` does.
pub(crate) const fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Decoded document text, indexable by codepoint.
///
/// Every offset in `0..=len()` is a character boundary, so a cursor position
/// reported by a text widget can be used directly without byte arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    /// Number of codepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The codepoints as a slice.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Codepoint at `offset`, if any.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Copy out `range` as a `String`.
    ///
    /// The range is clamped to the buffer, so out-of-range requests yield a
    /// shorter (possibly empty) string rather than panicking.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Clamp `offset` to a valid cursor position.
    #[must_use]
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len())
    }

    /// Fold `\r\n` and lone `\r` line endings into `\n`.
    ///
    /// ```rust
    /// use yomiscan::TextBuffer;
    ///
    /// let text = TextBuffer::from("読\r\nむ\rね").normalize_newlines();
    /// assert_eq!(text.to_string(), "読\nむ\nね");
    /// ```
    #[must_use]
    pub fn normalize_newlines(&self) -> Self {
        let mut chars = self.chars.iter().copied().peekable();
        std::iter::from_fn(|| {
            let c = chars.next()?;
            if c == '\r' {
                chars.next_if_eq(&'\n');
                return Some('\n');
            }
            Some(c)
        })
        .collect()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl FromIterator<char> for TextBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            std::fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}
