//! Error types for the scraping pipeline.
//!
//! Uses [`thiserror`] for derivation. Page-shape problems never surface
//! here; the engine degrades those to warnings. These errors cover the
//! boundaries: HTTP, decoding, and the record store.

use thiserror::Error;

/// Failure to decode a PDF into page content.
///
/// Raised by [`RegisterDocument`](crate::provider::RegisterDocument)
/// implementations; aborts the current document only.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The requested page does not exist.
    #[error("page {index} out of range ({count} pages)")]
    PageOutOfRange {
        /// Requested zero-based page index.
        index: usize,
        /// Number of pages in the document.
        count: usize,
    },
    /// The backing decoder failed.
    #[error("decode failed: {0}")]
    Backend(String),
}

/// Failure in the record store.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The store rejected the insert.
    #[error("store insert failed: {0}")]
    Insert(String),
}

/// Top-level scraping failure.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An HTTP request failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A URL could not be parsed or resolved.
    #[error("bad url {url}: {reason}")]
    BadUrl {
        /// The offending URL text.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// PDF decoding failed; the current document is abandoned.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The record store failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
