//! planscrape: extract development applications from council planning
//! register PDFs.
//!
//! This is the pipeline crate. It ties the
//! [`planscrape-core`](planscrape_core) engine to the outside world:
//! a decoder boundary ([`RegisterDocument`]), a storage boundary
//! ([`RecordSink`]), HTTP fetching with PDF link discovery, and the
//! per-document scan loop.
//!
//! # Architecture
//!
//! - **planscrape-core**: geometry, grid reconstruction, record
//!   extraction; pure and synchronous
//! - **planscrape** (this crate): document loop, fetching, storage
//!   interfaces
//! - **planscrape-cli**: replay and link-discovery tool

#![warn(missing_docs)]

/// Scraper configuration.
pub mod config;
/// Pipeline error types.
pub mod error;
/// Index fetching and PDF link discovery.
pub mod fetch;
/// Document scan loop.
pub mod pipeline;
/// PDF decoder boundary.
pub mod provider;
/// Record storage boundary.
pub mod sink;

pub use config::ScrapeConfig;
pub use error::{DecodeError, ScrapeError, SinkError};
pub use fetch::{discover_pdf_links, RegisterClient};
pub use pipeline::{scan_document, ScanSummary};
pub use provider::{InMemoryDocument, RegisterDocument};
pub use sink::{MemoryStore, RecordSink};

pub use planscrape_core::{
    extract_page, ExtractWarning, HeadingBinding, PageContent, PageExtraction, Record,
    RecordContext, WarningCode,
};
