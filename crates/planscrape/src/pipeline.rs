//! Document-level extraction pipeline.
//!
//! Walks a decoded document page by page through the engine, carrying
//! the sticky heading binding, and inserts validated records into the
//! sink as they appear. Engine warnings are logged and summarised;
//! decode failures abort the current document and propagate.

use chrono::Utc;
use planscrape_core::{extract_page, HeadingBinding, RecordContext};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::provider::RegisterDocument;
use crate::sink::RecordSink;

/// Counters for one processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pages walked.
    pub pages: usize,
    /// Records that passed validation.
    pub records: usize,
    /// Records newly inserted into the sink.
    pub inserted: usize,
    /// Records the sink already had.
    pub skipped: usize,
    /// Engine warnings across all pages.
    pub warnings: usize,
}

/// Extract every record from one register document into the sink.
///
/// `pdf_url` becomes each record's `information_url`. The heading
/// binding starts empty and persists across the document's pages, so a
/// single header-bearing page unlocks all its continuation pages.
pub fn scan_document(
    document: &dyn RegisterDocument,
    pdf_url: &str,
    config: &ScrapeConfig,
    sink: &mut dyn RecordSink,
) -> Result<ScanSummary, ScrapeError> {
    let ctx = RecordContext {
        information_url: pdf_url.to_string(),
        comment_url: config.comment_url.clone(),
        scrape_date: Utc::now().format("%Y-%m-%d").to_string(),
    };

    let mut binding = HeadingBinding::new();
    let mut summary = ScanSummary::default();

    for index in 0..document.page_count() {
        let content = document.page(index)?;
        let extraction = extract_page(&content, &mut binding, &ctx);

        for warning in &extraction.warnings {
            log::warn!("{pdf_url} page {}: {warning}", index + 1);
        }
        summary.warnings += extraction.warnings.len();

        for record in &extraction.records {
            summary.records += 1;
            if sink.insert(record)? {
                summary.inserted += 1;
            } else {
                summary.skipped += 1;
                log::debug!(
                    "{pdf_url}: {} already stored, skipped",
                    record.application_number
                );
            }
        }
        summary.pages += 1;
    }

    log::info!(
        "{pdf_url}: {} pages, {} records ({} new, {} skipped)",
        summary.pages,
        summary.records,
        summary.inserted,
        summary.skipped
    );
    Ok(summary)
}
