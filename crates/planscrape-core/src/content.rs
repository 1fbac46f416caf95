//! Decoder-facing page content model.
//!
//! A decoded PDF page arrives as an operator sequence plus a list of
//! positioned text items. These types are deliberately decoder-neutral;
//! any backend that can produce them can drive the engine. With the
//! `serde` feature they serialize, so decoded pages can be dumped to JSON
//! and replayed.

use crate::geometry::Matrix;

/// A path construction sub-operator inside [`Operator::ConstructPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOp {
    /// Consumes two arguments `(x, y)`.
    MoveTo,
    /// Consumes two arguments `(x, y)`.
    LineTo,
    /// Consumes four arguments `(x, y, width, height)`.
    Rectangle,
}

/// A content stream operator, reduced to the set the engine reacts to.
///
/// Decoders map their native opcode stream onto these variants and may
/// emit [`Operator::Other`] for everything else; the engine ignores it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// Push the current transform onto the state stack (`q`).
    Save,
    /// Pop the state stack into the current transform (`Q`).
    Restore,
    /// Concatenate a matrix onto the current transform (`cm`).
    Transform(Matrix),
    /// A path construction run: sub-ops with a flat argument vector.
    ConstructPath {
        /// Sub-operators, in order.
        ops: Vec<PathOp>,
        /// Flat argument vector consumed left to right by the sub-ops.
        args: Vec<f64>,
    },
    /// Fill the constructed path (`f`).
    Fill,
    /// Fill using the even-odd rule (`f*`).
    EoFill,
    /// Any operator the engine does not react to.
    Other,
}

/// One glyph run from the page's text layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextItem {
    /// The run's text content.
    pub text: String,
    /// Advance width of the run, in page units.
    pub width: f64,
    /// Text transform `[a, b, c, d, e, f]`; `(e, f)` is the run origin.
    pub transform: [f64; 6],
}

/// Everything the engine needs from one decoded page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// Content stream operators in document order.
    pub operators: Vec<Operator>,
    /// Text layer items in document order.
    pub text_items: Vec<TextItem>,
    /// Declared page rotation in degrees (0 and 90 are supported).
    pub rotation: i32,
}
