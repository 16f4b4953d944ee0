//! Scanner configuration.
//!
//! Everything the scanning core needs from its host, in one value:
//!
//! - `scan_length`: how many codepoints past the cursor the matcher may see.
//!   Longer windows find longer compounds but cost more per lookup.
//! - the encoding priority list used when opening documents;
//! - the sentence rules (terminators and quote tables);
//! - whether inline `《…》` readings are stripped after decoding.
//!
//! Setters that can reject their input return `Result`, so an invalid
//! configuration never reaches the scanner.

use encoding_rs::Encoding;

use crate::encoding::encodings_for_labels;
use crate::{EncodingResolver, Error, Result, SentenceExtractor, SentenceRules};

/// Default lookup window, in codepoints.
pub const DEFAULT_SCAN_LENGTH: usize = 16;

/// Host-supplied settings for decoding and scanning.
///
/// # Examples
///
/// ```rust
/// use yomiscan::ScanConfig;
///
/// let config = ScanConfig::default()
///     .with_scan_length(24)
///     .unwrap()
///     .with_encoding_labels(&["utf-8", "shift_jis"])
///     .unwrap()
///     .with_strip_readings(true);
///
/// assert_eq!(config.scan_length(), 24);
/// assert_eq!(config.resolver().candidates().len(), 2);
/// assert!(config.strip_readings());
///
/// assert!(ScanConfig::default().with_scan_length(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    scan_length: usize,
    resolver: EncodingResolver,
    extractor: SentenceExtractor,
    strip_readings: bool,
}

impl ScanConfig {
    /// Set the lookup window length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScanLength`] if `scan_length == 0`.
    pub fn with_scan_length(self, scan_length: usize) -> Result<Self> {
        if scan_length == 0 {
            return Err(Error::InvalidScanLength(scan_length));
        }
        Ok(Self {
            scan_length,
            ..self
        })
    }

    /// Replace the encoding priority list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyEncodingList`] if `encodings` is empty.
    pub fn with_encodings(self, encodings: Vec<&'static Encoding>) -> Result<Self> {
        Ok(Self {
            resolver: EncodingResolver::new(encodings)?,
            ..self
        })
    }

    /// Replace the encoding priority list by WHATWG labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] for an unrecognised label and
    /// [`Error::EmptyEncodingList`] if `labels` is empty.
    pub fn with_encoding_labels<S: AsRef<str>>(self, labels: &[S]) -> Result<Self> {
        let encodings = encodings_for_labels(labels)?;
        self.with_encodings(encodings)
    }

    /// Replace the sentence rules.
    #[must_use]
    pub fn with_rules(self, rules: SentenceRules) -> Self {
        Self {
            extractor: SentenceExtractor::new(rules),
            ..self
        }
    }

    /// Strip `《…》` readings after decoding.
    #[must_use]
    pub fn with_strip_readings(self, strip_readings: bool) -> Self {
        Self {
            strip_readings,
            ..self
        }
    }

    /// The lookup window length in codepoints.
    #[must_use]
    pub const fn scan_length(&self) -> usize {
        self.scan_length
    }

    /// The decoder for opening documents.
    #[must_use]
    pub const fn resolver(&self) -> &EncodingResolver {
        &self.resolver
    }

    /// The sentence extractor.
    #[must_use]
    pub const fn extractor(&self) -> &SentenceExtractor {
        &self.extractor
    }

    /// Whether readings are stripped after decoding.
    #[must_use]
    pub const fn strip_readings(&self) -> bool {
        self.strip_readings
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_length: DEFAULT_SCAN_LENGTH,
            resolver: EncodingResolver::default(),
            extractor: SentenceExtractor::default(),
            strip_readings: false,
        }
    }
}
