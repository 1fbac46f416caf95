//! Table reconstruction engine for council planning register PDFs.
//!
//! A register page carries no table structure: the grid is vector line
//! work and the text is loose glyph runs. This crate rebuilds the
//! logical table from geometry and extracts one development-application
//! record per data row.
//!
//! # Modules
//!
//! - [`geometry`] — [`Point`], [`Segment`], [`Rect`], [`Matrix`]
//! - [`content`] — decoder-facing page model: [`Operator`], [`TextItem`], [`PageContent`]
//! - [`path`] — filled-rectangle extraction from the operator stream
//! - [`rulings`] — thin-rectangle classification into grid lines
//! - [`grid`] — point set and [`Cell`] reconstruction
//! - [`text`] — [`Element`] conversion with corrected heights
//! - [`normalize`] — Y-flip and 90° rotation handling
//! - [`bind`] — element-to-cell ownership
//! - [`table`] — rows, [`HeadingBinding`], column projection
//! - [`record`] — [`Record`] validation and formatting
//! - [`extract`] — the per-page pipeline: [`extract_page`]
//! - [`error`] — structured warnings

#![warn(missing_docs)]

/// Element-to-cell ownership binding.
pub mod bind;
/// Decoder-facing page content model.
pub mod content;
/// Structured extraction warnings.
pub mod error;
/// Per-page extraction pipeline.
pub mod extract;
/// Geometric primitives.
pub mod geometry;
/// Grid point set and cell reconstruction.
pub mod grid;
/// Coordinate normalization.
pub mod normalize;
/// Filled-rectangle extraction from operators.
pub mod path;
/// Record validation and formatting.
pub mod record;
/// Ruling classification.
pub mod rulings;
/// Row assembly, heading discovery, column projection.
pub mod table;
/// Text element conversion.
pub mod text;

pub use bind::bind_elements;
pub use content::{Operator, PageContent, PathOp, TextItem};
pub use error::{ExtractWarning, WarningCode};
pub use extract::{extract_page, PageExtraction};
pub use geometry::{Matrix, Point, Rect, Segment, TOLERANCE};
pub use grid::Cell;
pub use path::{extract_filled_rects, PathExtractor};
pub use record::{parse_received_date, Record, RecordContext, NO_DESCRIPTION};
pub use rulings::{classify_rulings, Rulings, MIN_RULING_LENGTH};
pub use table::{group_rows, project_column, HeadingBinding};
pub use text::{elements_from_items, Element};
