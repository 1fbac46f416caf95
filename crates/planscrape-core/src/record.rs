//! Record validation and formatting.
//!
//! Turns mapped rows into development-application records: validates the
//! application number, joins multi-line cell text, and normalises the
//! received date to ISO form.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ExtractWarning, WarningCode};
use crate::grid::Cell;
use crate::table::{self, HeadingBinding};

/// Emitted description when a row has none.
pub const NO_DESCRIPTION: &str = "No Description Provided";

/// One extracted development application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Council reference, e.g. `690/006/15`.
    pub application_number: String,
    /// Property address, single line.
    pub address: String,
    /// Nature of the development, or [`NO_DESCRIPTION`].
    pub description: String,
    /// ISO date the application was received, or empty when unknown.
    pub received_date: String,
    /// URL of the source PDF.
    pub information_url: String,
    /// Council contact URL for comments on the application.
    pub comment_url: String,
    /// ISO date the record was scraped.
    pub scrape_date: String,
}

/// Source and date context stamped onto every record of a document.
#[derive(Debug, Clone)]
pub struct RecordContext {
    /// URL of the PDF being extracted.
    pub information_url: String,
    /// Fixed contact URL from configuration.
    pub comment_url: String,
    /// Today, as `YYYY-MM-DD`.
    pub scrape_date: String,
}

fn application_number_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+/[0-9]+/[0-9]+$").unwrap())
}

fn received_date_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,2}/[0-9]{2}/[0-9]{4}$").unwrap())
}

/// Cell text concatenated with no separator, trimmed.
pub fn concat_text(cell: &Cell) -> String {
    let joined: String = cell.elements.iter().map(|e| e.text.as_str()).collect();
    joined.trim().to_string()
}

/// Cell text space-joined with internal whitespace runs collapsed to
/// single spaces, trimmed. The joining rule for multi-line cells.
pub fn joined_text(cell: &Cell) -> String {
    let joined = cell
        .elements
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a register date written `D/MM/YYYY` into `YYYY-MM-DD`.
///
/// The shape is enforced first (day 1-2 digits, month exactly 2, year
/// exactly 4) because the calendar parser alone also accepts one-digit
/// months and two-digit years, which the registers never use on purpose.
/// Returns `None` for anything malformed or not a real date.
pub fn parse_received_date(text: &str) -> Option<String> {
    if !received_date_shape().is_match(text) {
        return None;
    }
    let date = NaiveDate::parse_from_str(text, "%d/%m/%Y").ok()?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Extract records from the page's rows.
///
/// Rows without an application-number cell are non-data rows (the header
/// row, continuation furniture) and are skipped silently. Rows with one
/// are validated: a malformed application number or an empty address
/// skips the row with a warning; the other two fields degrade to their
/// defaults. Row order is preserved.
pub fn extract_records(
    rows: &[Vec<Cell>],
    binding: &HeadingBinding,
    ctx: &RecordContext,
) -> (Vec<Record>, Vec<ExtractWarning>) {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    let app_heading = match binding.application_number {
        Some(rect) => rect,
        None => return (records, warnings),
    };

    for row in rows {
        let app_cell = match table::project_column(row, &app_heading) {
            Some(cell) => cell,
            None => continue,
        };

        let application_number = concat_text(app_cell);
        if !application_number_format().is_match(&application_number) {
            warnings.push(ExtractWarning::new(
                WarningCode::BadApplicationNumber,
                format!("row skipped: application number {application_number:?} not in N/N/N form"),
            ));
            continue;
        }

        let address = binding
            .address
            .and_then(|rect| table::project_column(row, &rect))
            .map(joined_text)
            .unwrap_or_default();
        if address.is_empty() {
            warnings.push(ExtractWarning::new(
                WarningCode::MissingAddress,
                format!("row {application_number} skipped: no address text"),
            ));
            continue;
        }

        let description = binding
            .description
            .and_then(|rect| table::project_column(row, &rect))
            .map(joined_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let received_date = binding
            .received_date
            .and_then(|rect| table::project_column(row, &rect))
            .map(concat_text)
            .and_then(|text| parse_received_date(&text))
            .unwrap_or_default();

        records.push(Record {
            application_number,
            address,
            description,
            received_date,
            information_url: ctx.information_url.clone(),
            comment_url: ctx.comment_url.clone(),
            scrape_date: ctx.scrape_date.clone(),
        });
    }

    (records, warnings)
}
