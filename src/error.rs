//! Error types for yomiscan.
//!
//! The scanning core itself is total: decoding, sentence extraction, and
//! window mapping always produce a value. Errors only come from the edges,
//! i.e. configuration and reading documents from disk.

use std::path::PathBuf;

/// Errors that can occur while configuring a scanner or loading a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid scan length (must be > 0).
    #[error("invalid scan length: {0} (must be > 0)")]
    InvalidScanLength(usize),

    /// The encoding priority list has no candidates.
    #[error("encoding priority list is empty")]
    EmptyEncodingList,

    /// An encoding label that is not known.
    #[error("unknown encoding label: {0:?}")]
    UnknownEncoding(String),

    /// Reading a document failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for yomiscan operations.
pub type Result<T> = std::result::Result<T, Error>;
