//! A minimal headword list implementing [`Lookup`].
//!
//! Real dictionaries deinflect and rank; this one only knows exact headwords.
//! It backs the command-line tool and tests.
//!
//! ## File Format
//!
//! One entry per line, tab separated, gloss optional:
//!
//! ```text
//! # comment
//! 日本	Japan
//! 日本語	Japanese (language)
//! 本	book
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::{Error, Lookup, MatchResult, Result};

/// A headword and its gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The dictionary form.
    pub headword: String,
    /// Free-text meaning; may be empty.
    pub gloss: String,
}

/// Headwords indexed for prefix lookup.
///
/// ```rust
/// use yomiscan::{Lookup, WordList};
///
/// let words = WordList::parse("日本\tJapan\n日本語\tJapanese\n");
/// let result = words.find_term("日本語を話す", false);
///
/// assert_eq!(result.matched_len, 3);
/// assert_eq!(result.definitions[0].headword, "日本語");
/// assert_eq!(result.definitions[1].headword, "日本");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: HashMap<String, Vec<Entry>>,
    longest: usize,
}

impl WordList {
    /// Parse tab-separated entries. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut words = Self::default();
        for line in source.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (headword, gloss) = line.split_once('\t').unwrap_or((line, ""));
            words.insert(headword.trim(), gloss.trim());
        }
        words
    }

    /// Load entries from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    /// Add an entry. Empty headwords are ignored.
    pub fn insert(&mut self, headword: &str, gloss: &str) {
        if headword.is_empty() {
            return;
        }
        self.longest = self.longest.max(headword.chars().count());
        self.entries
            .entry(headword.to_string())
            .or_default()
            .push(Entry {
                headword: headword.to_string(),
                gloss: gloss.to_string(),
            });
    }

    /// Number of distinct headwords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lookup for WordList {
    type Definition = Entry;

    fn find_term(&self, window: &str, exact: bool) -> MatchResult<Entry> {
        if exact {
            return self
                .entries
                .get(window)
                .map(|entries| MatchResult {
                    definitions: entries.clone(),
                    matched_len: window.chars().count(),
                })
                .unwrap_or_default();
        }

        // Byte offsets of every prefix end, longest first.
        let ends: Vec<usize> = window
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.longest)
            .collect();

        let mut result = MatchResult::none();
        for (count, &end) in ends.iter().enumerate().rev() {
            if let Some(entries) = self.entries.get(&window[..end]) {
                if result.matched_len == 0 {
                    result.matched_len = count + 1;
                }
                result.definitions.extend(entries.iter().cloned());
            }
        }
        result
    }
}
