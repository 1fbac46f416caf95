//! Per-page extraction pipeline.
//!
//! Wires the stages together: operator walk, grid reconstruction, text
//! element conversion, normalization, ownership binding, row assembly,
//! and record extraction. One call per decoded page; the caller owns the
//! document loop and the sticky [`HeadingBinding`].

use crate::bind::bind_elements;
use crate::content::PageContent;
use crate::error::{ExtractWarning, WarningCode};
use crate::grid::{self, Cell};
use crate::normalize::normalize_page;
use crate::path::extract_filled_rects;
use crate::record::{self, Record, RecordContext};
use crate::rulings::classify_rulings;
use crate::table::{group_rows, HeadingBinding};
use crate::text::{elements_from_items, sort_elements};

/// Result of extracting one page: records plus collected diagnostics.
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    /// Records that passed validation, in row order.
    pub records: Vec<Record>,
    /// Non-fatal issues encountered on the page.
    pub warnings: Vec<ExtractWarning>,
}

/// Short, loggable summary of a page's text, for diagnostics on pages
/// that produce no rows.
fn text_summary(content: &PageContent) -> String {
    if content.text_items.is_empty() {
        return "(no text)".to_string();
    }
    content
        .text_items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Extract all records from one decoded page.
///
/// `binding` carries the document's heading discovery state: the first
/// page with recognisable headers populates it, and later pages reuse
/// it, so continuation pages without header text still map. Pages that
/// cannot be read degrade to zero records with a warning; this function
/// has no failure mode.
pub fn extract_page(
    content: &PageContent,
    binding: &mut HeadingBinding,
    ctx: &RecordContext,
) -> PageExtraction {
    let mut out = PageExtraction::default();

    if content.rotation != 0 && content.rotation != 90 {
        out.warnings.push(ExtractWarning::new(
            WarningCode::UnsupportedRotation,
            format!("page declares rotation {}; only 0 and 90 are handled", content.rotation),
        ));
    }

    let rects = extract_filled_rects(&content.operators);
    let rulings = classify_rulings(&rects);
    let mut cells: Vec<Cell> = grid::reconstruct(&rulings);
    let mut elements = elements_from_items(&content.text_items);

    normalize_page(&mut cells, &mut elements, content.rotation);
    grid::sort_cells(&mut cells);
    sort_elements(&mut elements);

    if cells.is_empty() {
        out.warnings.push(ExtractWarning::new(
            WarningCode::GridNotFound,
            format!("no table grid on page; text seen: {}", text_summary(content)),
        ));
        return out;
    }

    bind_elements(&mut cells, elements);

    binding.discover(&cells);
    if !binding.is_usable() {
        out.warnings.push(ExtractWarning::new(
            WarningCode::HeadersMissing,
            format!(
                "application-number or address heading not found; text seen: {}",
                text_summary(content)
            ),
        ));
        return out;
    }

    let rows = group_rows(cells);
    let (records, row_warnings) = record::extract_records(&rows, binding, ctx);
    out.records = records;
    out.warnings.extend(row_warnings);
    out
}
