//! Encoding recovery for documents of unknown origin.
//!
//! Plain-text novels circulate in whatever encoding the uploader's editor
//! happened to use: UTF-8, Shift_JIS, EUC-JP, and occasionally UTF-16. There
//! is no header to tell them apart, and a reader that refuses to open a file
//! is worse than one that shows a few replacement glyphs.
//!
//! ## The Algorithm
//!
//! ```text
//! priority: [UTF-8, Shift_JIS, EUC-JP, UTF-16LE]
//!
//! 1. Strict-decode with each candidate in order.
//!    First success wins, even if a later candidate is the "true" encoding.
//! 2. Everything failed? Each candidate reports the byte offset of its first
//!    malformed sequence:
//!
//!        UTF-8      failed at 0
//!        Shift_JIS  failed at 1734   <- longest valid prefix
//!        EUC-JP     failed at 12
//!        UTF-16LE   failed at 1734
//!
//! 3. Pick the largest offset (ties: earliest in priority order) and
//!    re-decode lossily, substituting U+FFFD for each malformed sequence.
//! ```
//!
//! The longest-prefix rule is a proxy for "closest match", not a detector.
//! Which replacement pattern a damaged file produces depends on it, so it is
//! kept deliberately simple.
//!
//! ## Byte-Order Marks
//!
//! A candidate's own BOM is consumed. The UTF-16 candidate also honours the
//! opposite-endian UTF-16 BOM and reports the encoding it actually used.

use encoding_rs::{DecoderResult, Encoding, EUC_JP, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8};
use tracing::{debug, warn};

use crate::{Error, Result, TextBuffer};

/// The default candidate list, most likely first for Japanese text.
#[must_use]
pub fn default_encodings() -> Vec<&'static Encoding> {
    vec![UTF_8, SHIFT_JIS, EUC_JP, UTF_16LE]
}

/// Resolve `labels` (WHATWG names such as `"utf-8"` or `"sjis"`) to encodings.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] for a label `encoding_rs` does not know.
pub fn encodings_for_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<&'static Encoding>> {
    labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
        })
        .collect()
}

/// The outcome of decoding a document.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// The decoded text.
    pub text: TextBuffer,
    /// The encoding that produced `text`.
    pub encoding: &'static Encoding,
    /// Whether malformed input was replaced with U+FFFD.
    pub had_errors: bool,
}

impl Decoded {
    /// Name of the chosen encoding, e.g. `"Shift_JIS"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Decodes bytes by trying a priority list of candidate encodings.
///
/// ## Example
///
/// ```rust
/// use yomiscan::EncodingResolver;
///
/// let resolver = EncodingResolver::default();
/// let decoded = resolver.resolve("hello".as_bytes());
///
/// assert_eq!(decoded.label(), "UTF-8");
/// assert!(!decoded.had_errors);
/// ```
#[derive(Debug, Clone)]
pub struct EncodingResolver {
    candidates: Vec<&'static Encoding>,
}

impl EncodingResolver {
    /// Create a resolver with a custom priority list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyEncodingList`] if `candidates` is empty.
    pub fn new(candidates: Vec<&'static Encoding>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(Error::EmptyEncodingList);
        }
        Ok(Self { candidates })
    }

    /// The candidates in priority order.
    #[must_use]
    pub fn candidates(&self) -> &[&'static Encoding] {
        &self.candidates
    }

    /// Decode `raw`. Never fails.
    pub fn resolve(&self, raw: &[u8]) -> Decoded {
        // (failure offset, encoding) of the best failed candidate so far
        let mut best: Option<(usize, &'static Encoding)> = None;

        for &candidate in &self.candidates {
            let encoding = effective_encoding(candidate, raw);
            match decode_strict(encoding, raw) {
                Ok(text) => {
                    debug!(encoding = encoding.name(), bytes = text.len(), "decoded");
                    return Decoded {
                        text: TextBuffer::from(text),
                        encoding,
                        had_errors: false,
                    };
                }
                Err(offset) => {
                    debug!(encoding = encoding.name(), offset, "strict decode failed");
                    // Strictly greater keeps the earlier candidate on ties.
                    if best.map_or(true, |(longest, _)| offset > longest) {
                        best = Some((offset, encoding));
                    }
                }
            }
        }

        // The candidate list is never empty, so some candidate was recorded.
        let (offset, encoding) = best.unwrap_or((0, self.candidates[0]));
        let (text, had_errors) = encoding.decode_with_bom_removal(raw);
        warn!(
            encoding = encoding.name(),
            valid_prefix = offset,
            "no candidate decoded cleanly, substituting replacement characters"
        );
        Decoded {
            text: TextBuffer::from(&*text),
            encoding,
            had_errors,
        }
    }
}

impl Default for EncodingResolver {
    fn default() -> Self {
        Self {
            candidates: default_encodings(),
        }
    }
}

/// Decode `raw` with the default priority list.
///
/// ```rust
/// let decoded = yomiscan::resolve(b"");
/// assert!(decoded.text.is_empty());
/// assert_eq!(decoded.label(), "UTF-8");
/// ```
pub fn resolve(raw: &[u8]) -> Decoded {
    EncodingResolver::default().resolve(raw)
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

/// The encoding a candidate really decodes with, after BOM sniffing.
fn effective_encoding(candidate: &'static Encoding, raw: &[u8]) -> &'static Encoding {
    if !is_utf16(candidate) {
        return candidate;
    }
    match Encoding::for_bom(raw) {
        Some((sniffed, _)) if is_utf16(sniffed) => sniffed,
        _ => candidate,
    }
}

/// Strict decode. On failure returns the byte offset where the first
/// malformed sequence begins.
fn decode_strict(encoding: &'static Encoding, raw: &[u8]) -> std::result::Result<String, usize> {
    let mut decoder = encoding.new_decoder_with_bom_removal();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(raw.len())
        .unwrap_or(raw.len().saturating_mul(3));
    let mut out = String::with_capacity(capacity);
    let mut consumed = 0;

    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&raw[consumed..], &mut out, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::OutputFull => out.reserve(raw.len() - consumed + 16),
            DecoderResult::Malformed(bad, after) => {
                return Err(consumed - usize::from(after) - usize::from(bad));
            }
        }
    }
}
