//! Document loading and pointer-driven lookup.
//!
//! [`Scanner`] wires the pieces together for a host application:
//!
//! ```text
//! open:  bytes -> resolver -> (strip readings) -> TextBuffer
//! scan:  (text, P) -> flatten -> Lookup::find_term -> selection
//!                  \-> sentence at P, attached to the result
//! ```
//!
//! The scanner holds configuration only. The text and cursor are passed in
//! on every call, and every result is recomputed from scratch.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::window::WindowSummary;
use crate::{
    flatten, strip_readings, Decoded, Error, Lookup, MatchResult, Result, ScanConfig, Sentence,
    Span, TextBuffer,
};

/// Outcome of a pointer-driven lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult<D> {
    /// The window handed to the matcher.
    pub window: WindowSummary,
    /// Window codepoints the matcher consumed.
    pub matched_len: usize,
    /// What to highlight in the buffer; empty when nothing matched.
    pub selection: Span,
    /// The sentence around the cursor.
    pub sentence: Sentence,
    /// Matching definitions, best first.
    pub definitions: Vec<D>,
}

/// Decodes documents and answers lookups against them.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner.
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Decode raw document bytes.
    ///
    /// Line endings are folded to `\n`, then readings are stripped if
    /// configured. All offsets the scanner reports refer to this text.
    pub fn decode(&self, raw: &[u8]) -> Decoded {
        let mut decoded = self.config.resolver().resolve(raw);
        decoded.text = decoded.text.normalize_newlines();
        if self.config.strip_readings() {
            decoded.text = TextBuffer::from(strip_readings(&decoded.text.to_string()));
        }
        decoded
    }

    /// Read and decode a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read. Decoding itself
    /// never fails.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Decoded> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = self.decode(&raw);
        info!(
            path = %path.display(),
            bytes = raw.len(),
            chars = decoded.text.len(),
            encoding = decoded.label(),
            had_errors = decoded.had_errors,
            "loaded document"
        );
        Ok(decoded)
    }

    /// The sentence around `position`.
    pub fn sentence(&self, text: &TextBuffer, position: usize) -> Sentence {
        self.config.extractor().extract(text, position)
    }

    /// Look up the text under the cursor.
    ///
    /// Returns `None` when no lookup is possible at `position` (end of
    /// buffer or whitespace); the host should clear its selection.
    pub fn scan<L: Lookup>(
        &self,
        text: &TextBuffer,
        position: usize,
        lookup: &L,
    ) -> Option<ScanResult<L::Definition>> {
        let Some(window) = flatten(text, position, self.config.scan_length()) else {
            debug!(position, "no lookup at cursor");
            return None;
        };

        let MatchResult {
            definitions,
            matched_len,
        } = lookup.find_term(window.text(), false);
        let selection = window.selection(matched_len);
        let sentence = self.sentence(text, window.start());

        debug!(
            position,
            window = window.text(),
            matched_len,
            %selection,
            definitions = definitions.len(),
            "scanned"
        );

        Some(ScanResult {
            window: WindowSummary::from(&window),
            matched_len,
            selection,
            sentence,
            definitions,
        })
    }

    /// Look up a typed query as a whole (search box).
    pub fn search<L: Lookup>(&self, query: &str, lookup: &L) -> MatchResult<L::Definition> {
        let result = lookup.find_term(query.trim(), true);
        debug!(query, definitions = result.definitions.len(), "searched");
        result
    }
}

/// Validate a saved cursor against a freshly loaded buffer.
///
/// A position past the end (the file changed since it was saved) restarts
/// at the top rather than at the end.
#[must_use]
pub fn restore_position(text: &TextBuffer, saved: usize) -> usize {
    if saved > text.len() {
        0
    } else {
        saved
    }
}
