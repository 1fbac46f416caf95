//! Row assembly, heading discovery, and column projection.
//!
//! Register layouts vary between councils and even between documents:
//! column order changes and headings are worded half a dozen ways. The
//! table is therefore read through a [`HeadingBinding`]: heading cells
//! are recognised once by fuzzy text match, and every data row's cells
//! are then mapped to logical columns purely by horizontal overlap with
//! the remembered heading geometry.

use std::sync::OnceLock;

use regex::Regex;

use crate::geometry::{Rect, TOLERANCE};
use crate::grid::Cell;

/// Minimum horizontal overlap (percent) between a data cell and a
/// heading cell for the data cell to belong to that column.
const COLUMN_OVERLAP_PERCENT: f64 = 90.0;

/// Group sorted cells into rows.
///
/// A cell joins the first row whose representative `y` (the `y` of the
/// cell that opened the row) differs from its own by less than
/// [`TOLERANCE`]; otherwise it opens a new row. Rows keep the input's
/// top-down order and each row is sorted left-to-right.
pub fn group_rows(cells: Vec<Cell>) -> Vec<Vec<Cell>> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for cell in cells {
        let existing = rows
            .iter_mut()
            .find(|row| (row[0].rect.y - cell.rect.y).abs() < TOLERANCE);
        match existing {
            Some(row) => row.push(cell),
            None => rows.push(vec![cell]),
        }
    }

    for row in &mut rows {
        row.sort_by(|a, b| a.rect.x.partial_cmp(&b.rect.x).unwrap());
    }

    rows
}

/// Per-document mapping from logical columns to heading-cell geometry.
///
/// Discovered on the first page that exposes recognisable header text
/// and reused for every later page of the same document, including
/// continuation pages that repeat the grid without headings. Only the
/// heading rectangles are kept; cells themselves are per-page.
#[derive(Debug, Clone, Default)]
pub struct HeadingBinding {
    /// Application-number column heading (mandatory).
    pub application_number: Option<Rect>,
    /// Received-date column heading (optional).
    pub received_date: Option<Rect>,
    /// Address column heading (mandatory).
    pub address: Option<Rect>,
    /// Description column heading (optional).
    pub description: Option<Rect>,
}

fn application_number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(developmentnumber|developmentno\.|appno)").unwrap())
}

fn received_date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(dateofapplication|dateofregistration|dateregistered)").unwrap()
    })
}

fn address_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(propertyaddress|locationofdevelopment)").unwrap())
}

fn description_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(natureofdevelopment|descriptionofdev)").unwrap())
}

/// The comparison key for heading matching: element texts concatenated
/// with no separator, all whitespace removed, lowercased.
pub fn heading_key(cell: &Cell) -> String {
    cell.elements
        .iter()
        .flat_map(|e| e.text.chars())
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

impl HeadingBinding {
    /// Empty binding; nothing discovered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the mandatory columns are bound and rows can be mapped.
    pub fn is_usable(&self) -> bool {
        self.application_number.is_some() && self.address.is_some()
    }

    /// Scan a page's cells and bind any still-unbound column whose
    /// heading text matches. The first matching cell per column wins;
    /// already-bound columns are never rebound.
    pub fn discover(&mut self, cells: &[Cell]) {
        for cell in cells {
            let key = heading_key(cell);
            if key.is_empty() {
                continue;
            }
            if self.application_number.is_none() && application_number_pattern().is_match(&key) {
                self.application_number = Some(cell.rect);
            } else if self.received_date.is_none() && received_date_pattern().is_match(&key) {
                self.received_date = Some(cell.rect);
            } else if self.address.is_none() && address_pattern().is_match(&key) {
                self.address = Some(cell.rect);
            } else if self.description.is_none() && description_pattern().is_match(&key) {
                self.description = Some(cell.rect);
            }
        }
    }
}

/// Find a row's data cell for a bound column: the first cell whose
/// horizontal overlap with the heading rectangle exceeds 90%.
pub fn project_column<'a>(row: &'a [Cell], heading: &Rect) -> Option<&'a Cell> {
    row.iter()
        .find(|cell| cell.rect.horizontal_overlap_percent(heading) > COLUMN_OVERLAP_PERCENT)
}
