//! Sentence extraction around a cursor.
//!
//! Given a cursor position, find the sentence it sits in. The sentence is
//! attached to every dictionary result so that flashcards carry context.
//!
//! ## The Hard Part: Quotations
//!
//! Japanese fiction nests dialogue in bracket quotes, and dialogue contains
//! its own sentence-ending punctuation:
//!
//! ```text
//! 彼は「行く。すぐ戻る。」と言った。
//!          ^       ^              ^
//!          inside quotes           the real end
//! ```
//!
//! A terminator only ends a sentence when no quotation is open. Each scan
//! direction keeps a stack of the quote marks it still has to leave:
//!
//! ```text
//! forward:  「 push 」 ... 」 pop ... 。 (stack empty) -> end
//! backward: 」 push 「 ... 「 pop ... 。 (stack empty) -> start
//! ```
//!
//! The two directions use separate tables. Straight quotes (`"` and `'`)
//! appear in both tables as their own partner.
//!
//! ## Boundary Rules
//!
//! | Scan | Empty stack, sees | Result |
//! |------|-------------------|--------|
//! | backward | terminator, opening quote, newline | start after it |
//! | forward | terminator | end after it |
//! | forward | closing quote | end before it |
//!
//! Newlines only bound the start. Hard-wrapped prose continues a sentence on
//! the next line, so the forward scan runs through line breaks until it finds
//! a terminator.
//!
//! Unbalanced quotes are not errors. A stray mark is simply pushed or popped,
//! which on malformed text can produce a sentence crossing a boundary a
//! human reader would see.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::text::is_newline;
use crate::{Span, TextBuffer};

/// Punctuation and quotation tables driving sentence extraction.
///
/// The default covers Japanese (`。．？！「」『』`) plus ASCII `. ? ! " '`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRules {
    terminators: Vec<char>,
    /// Opening quote -> closing quote.
    quotes_forward: HashMap<char, char>,
    /// Closing quote -> opening quote.
    quotes_backward: HashMap<char, char>,
}

impl SentenceRules {
    /// Rules with no terminators and no quotes. Only newlines split.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            terminators: Vec::new(),
            quotes_forward: HashMap::new(),
            quotes_backward: HashMap::new(),
        }
    }

    /// Replace the terminator set.
    #[must_use]
    pub fn with_terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.terminators = terminators.into_iter().collect();
        self
    }

    /// Register a quote pair in both scan tables.
    ///
    /// For symmetric marks pass the same character twice.
    #[must_use]
    pub fn with_quote_pair(mut self, open: char, close: char) -> Self {
        self.quotes_forward.insert(open, close);
        self.quotes_backward.insert(close, open);
        self
    }

    /// Whether `c` ends a sentence outside of quotes.
    #[must_use]
    pub fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// The closing partner of an opening quote.
    #[must_use]
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.quotes_forward.get(&open).copied()
    }

    /// The opening partner of a closing quote.
    #[must_use]
    pub fn opener_for(&self, close: char) -> Option<char> {
        self.quotes_backward.get(&close).copied()
    }
}

impl Default for SentenceRules {
    fn default() -> Self {
        Self::empty()
            .with_terminators("。．.？?！!".chars())
            .with_quote_pair('「', '」')
            .with_quote_pair('『', '』')
            .with_quote_pair('\'', '\'')
            .with_quote_pair('"', '"')
    }
}

/// A sentence found around a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// The detected boundaries, before any trimming.
    pub span: Span,
    /// The sentence text with surrounding whitespace trimmed.
    pub text: String,
}

/// Quote-aware sentence extractor.
///
/// ## Example
///
/// ```rust
/// use yomiscan::{SentenceExtractor, TextBuffer};
///
/// let extractor = SentenceExtractor::default();
/// let text = TextBuffer::from("A.B.C.");
/// let sentence = extractor.extract(&text, 2);
///
/// assert_eq!(sentence.text, "B.");
/// assert_eq!((sentence.span.start, sentence.span.end), (2, 4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceExtractor {
    rules: SentenceRules,
}

impl SentenceExtractor {
    /// Create an extractor with custom rules.
    #[must_use]
    pub fn new(rules: SentenceRules) -> Self {
        Self { rules }
    }

    /// The rules in use.
    #[must_use]
    pub fn rules(&self) -> &SentenceRules {
        &self.rules
    }

    /// Find the sentence containing `position`.
    ///
    /// Total: positions past the end are clamped, and the whole buffer is
    /// returned when no boundary exists.
    pub fn extract(&self, text: &TextBuffer, position: usize) -> Sentence {
        let chars = text.as_chars();
        let position = text.clamp(position);

        let span = Span::new(
            self.find_start(chars, position),
            self.find_end(chars, position),
        );
        trace!(position, %span, "sentence");

        Sentence {
            span,
            text: text.slice(span.range()).trim().to_string(),
        }
    }

    fn find_start(&self, chars: &[char], position: usize) -> usize {
        // Openers we must pass before the region is left, nearest on top.
        let mut stack: Vec<char> = Vec::new();

        for i in (0..position).rev() {
            let c = chars[i];

            if stack.is_empty()
                && (self.rules.is_terminator(c)
                    || self.rules.closer_for(c).is_some()
                    || is_newline(c))
            {
                return i + 1;
            }

            if stack.last() == Some(&c) {
                stack.pop();
            } else if let Some(open) = self.rules.opener_for(c) {
                stack.push(open);
            }
        }

        0
    }

    fn find_end(&self, chars: &[char], position: usize) -> usize {
        let mut stack: Vec<char> = Vec::new();

        for (i, &c) in chars.iter().enumerate().skip(position) {
            if stack.is_empty() {
                if self.rules.is_terminator(c) {
                    return i + 1;
                }
                if self.rules.opener_for(c).is_some() {
                    return i;
                }
            }

            if stack.last() == Some(&c) {
                stack.pop();
            } else if let Some(close) = self.rules.closer_for(c) {
                stack.push(close);
            }
        }

        chars.len()
    }
}

/// Find the sentence at `position` with the default rules.
pub fn find_sentence(text: &TextBuffer, position: usize) -> Sentence {
    SentenceExtractor::default().extract(text, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_at(text: &str, position: usize) -> Sentence {
        find_sentence(&TextBuffer::from(text), position)
    }

    #[test]
    fn test_terminators_split() {
        let sentence = sentence_at("A.B.C.", 2);
        assert_eq!(sentence.span, Span::new(2, 4));
        assert_eq!(sentence.text, "B.");

        // Cursor on the terminator itself belongs to the same sentence.
        assert_eq!(sentence_at("A.B.C.", 3).span, Span::new(2, 4));
    }

    #[test]
    fn test_japanese_terminators() {
        let sentence = sentence_at("今日は晴れ。明日は雨？", 7);
        assert_eq!(sentence.text, "明日は雨？");
    }

    #[test]
    fn test_quoted_terminator_does_not_split() {
        let text = "彼は「A.B」C.";
        assert_eq!(sentence_at(text, 0).text, text);
        assert_eq!(sentence_at(text, 2).text, text);
    }

    #[test]
    fn test_nested_quotes() {
        let text = "「彼は『行く。』と言った。」次。";
        let sentence = sentence_at(text, 0);
        assert_eq!(sentence.text, text);
    }

    #[test]
    fn test_opening_quote_starts_sentence_from_inside() {
        let sentence = sentence_at("「A.B」C.", 1);
        assert_eq!(sentence.span, Span::new(1, 3));
        assert_eq!(sentence.text, "A.");
    }

    #[test]
    fn test_closing_quote_ends_sentence() {
        let sentence = sentence_at("「A.B」C.", 3);
        assert_eq!(sentence.text, "B");
    }

    #[test]
    fn test_straight_quotes() {
        let text = "He said \"Stop.\" Then left.";
        assert_eq!(sentence_at(text, 17).text, "Then left.");
        assert_eq!(sentence_at(text, 10).text, "Stop.");
        assert_eq!(sentence_at(text, 0).text, "He said");
    }

    #[test]
    fn test_newline_bounds_start() {
        let text = "first line\nsecond line";
        let sentence = sentence_at(text, 14);
        assert_eq!(sentence.span, Span::new(11, 22));
        assert_eq!(sentence.text, "second line");
    }

    #[test]
    fn test_sentence_continues_across_line_wrap() {
        let sentence = sentence_at("吾輩は猫で\nある。名前", 1);
        assert_eq!(sentence.span, Span::new(0, 9));
        assert_eq!(sentence.text, "吾輩は猫で\nある。");

        // From the continuation line the start stops at the wrap.
        assert_eq!(sentence_at("吾輩は猫で\nある。名前", 7).text, "ある。");
    }

    #[test]
    fn test_trimming_keeps_boundaries() {
        let sentence = sentence_at("A. B. C.", 3);
        assert_eq!(sentence.span, Span::new(2, 5));
        assert_eq!(sentence.text, "B.");
    }

    #[test]
    fn test_unbalanced_closer_is_permissive() {
        let sentence = sentence_at("A」B。C", 2);
        assert_eq!(sentence.span, Span::new(0, 4));
        assert_eq!(sentence.text, "A」B。");
    }

    #[test]
    fn test_position_past_end_is_clamped() {
        let sentence = sentence_at("One. Two", 100);
        assert_eq!(sentence.span, Span::new(4, 8));
        assert_eq!(sentence.text, "Two");
    }

    #[test]
    fn test_empty_text() {
        let sentence = sentence_at("", 0);
        assert!(sentence.span.is_empty());
        assert!(sentence.text.is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let rules = SentenceRules::empty()
            .with_terminators([';'])
            .with_quote_pair('(', ')');
        let extractor = SentenceExtractor::new(rules);
        let text = TextBuffer::from("a; b (c; d) e; f");
        assert_eq!(extractor.extract(&text, 3).text, "b (c; d) e;");
    }
}
