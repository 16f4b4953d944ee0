//! # yomiscan
//!
//! The text-scanning core of a pop-up dictionary reader.
//!
//! ## The Problem
//!
//! A reader shows a plain-text novel. The user points at a word and expects
//! its dictionary entry, plus the sentence it came from. Three things stand
//! in the way:
//!
//! - The file has no declared encoding. It may be UTF-8, Shift_JIS, EUC-JP,
//!   or UTF-16, and it may be damaged.
//! - Words wrap across hard line breaks, so the text under the cursor is not
//!   contiguous.
//! - Sentences nest inside quotations that carry their own punctuation.
//!
//! ## Components
//!
//! ### Encoding Resolver
//!
//! Try a priority list of encodings strictly; first success wins. If all
//! fail, use the one that decoded the longest valid prefix and substitute
//! replacement characters. See [`EncodingResolver`].
//!
//! ### Sentence Extractor
//!
//! Scan outward from the cursor, tracking open quotations on a stack so that
//! a `。` inside `「…」` does not end the sentence. See [`SentenceExtractor`].
//!
//! ```text
//! 彼は「行く。」と言った。次の日。
//! └──────────────────────┘ cursor anywhere on 彼は
//! ```
//!
//! ### Window Flattener & Offset Mapper
//!
//! Cut `scan_length` codepoints at the cursor, drop newlines, let the
//! dictionary match, then walk the original text to turn the matched length
//! back into a selection that includes any skipped newlines. See
//! [`flatten`] and [`map_match_to_span`].
//!
//! ## Quick Start
//!
//! ```rust
//! use yomiscan::{Scanner, WordList};
//!
//! let scanner = Scanner::default();
//! let decoded = scanner.decode("hello\n world.".as_bytes());
//! assert_eq!(decoded.label(), "UTF-8");
//!
//! let words = WordList::parse("hello\tgreeting\n");
//! let result = scanner.scan(&decoded.text, 0, &words).unwrap();
//!
//! assert_eq!(result.window.text, "hello world.");
//! assert_eq!(result.selection.range(), 0..5);
//! assert_eq!(result.sentence.text, "hello\n world.");
//! ```
//!
//! ## Cost
//!
//! | Operation | Time |
//! |-----------|------|
//! | resolve | O(n × candidates) |
//! | extract sentence | O(distance to nearest boundary), O(n) worst case |
//! | flatten / map back | O(scan_length) |
//!
//! Sentence extraction is unbounded on text without punctuation. Hosts that
//! scan on every pointer move may want to cap the distance themselves.

mod config;
mod encoding;
mod error;
mod lookup;
mod readings;
mod scanner;
mod search;
mod sentence;
mod span;
mod text;
mod window;
mod wordlist;

pub use config::{ScanConfig, DEFAULT_SCAN_LENGTH};
pub use encoding::{default_encodings, encodings_for_labels, resolve, Decoded, EncodingResolver};
pub use error::{Error, Result};
pub use lookup::{Lookup, MatchResult};
pub use readings::strip_readings;
pub use scanner::{restore_position, ScanResult, Scanner};
pub use search::TextSearch;
pub use sentence::{find_sentence, Sentence, SentenceExtractor, SentenceRules};
pub use span::Span;
pub use text::TextBuffer;
pub use window::{flatten, map_match_to_span, FlattenedWindow, WindowSummary};
pub use wordlist::{Entry, WordList};

pub use encoding_rs::Encoding;
