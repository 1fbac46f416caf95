//! Filled-rectangle extraction from the operator stream.
//!
//! Walks the page's operators in order, tracking the current transform
//! and a save/restore stack, and collects every axis-aligned rectangle
//! that is subsequently filled. Ruling lines in register PDFs are drawn
//! exactly this way: a `Rectangle` sub-op followed by `Fill`.
//!
//! The walk is deliberately tolerant. An argument underrun inside a path
//! run drops the run's remaining sub-ops (and with them any pending
//! rectangle); a `Restore` on an empty stack is ignored. Nothing here
//! aborts extraction.

use crate::content::{Operator, PathOp};
use crate::geometry::{Matrix, Point, Rect};

/// Walks an operator sequence and accumulates filled rectangles.
#[derive(Debug)]
pub struct PathExtractor {
    transform: Matrix,
    saved: Vec<Matrix>,
    pending: Option<Rect>,
    filled: Vec<Rect>,
}

impl Default for PathExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExtractor {
    /// Create an extractor with an identity transform and empty stack.
    pub fn new() -> Self {
        Self {
            transform: Matrix::identity(),
            saved: Vec::new(),
            pending: None,
            filled: Vec::new(),
        }
    }

    /// Process a full operator sequence.
    pub fn process(&mut self, operators: &[Operator]) {
        for op in operators {
            match op {
                Operator::Save => self.saved.push(self.transform),
                Operator::Restore => {
                    if let Some(m) = self.saved.pop() {
                        self.transform = m;
                    }
                }
                Operator::Transform(m) => {
                    // New matrix applies before the existing transform,
                    // matching the PDF `cm` operator.
                    self.transform = m.concat(&self.transform);
                }
                Operator::ConstructPath { ops, args } => self.construct_path(ops, args),
                Operator::Fill | Operator::EoFill => {
                    if let Some(rect) = self.pending.take() {
                        self.filled.push(rect);
                    }
                }
                Operator::Other => {}
            }
        }
    }

    /// Consume the extractor and return the filled rectangles in the
    /// order they were committed.
    pub fn into_rects(self) -> Vec<Rect> {
        self.filled
    }

    fn construct_path(&mut self, ops: &[PathOp], args: &[f64]) {
        let mut idx = 0usize;

        for op in ops {
            match op {
                PathOp::MoveTo | PathOp::LineTo => {
                    if idx + 2 > args.len() {
                        self.pending = None;
                        return;
                    }
                    idx += 2;
                }
                PathOp::Rectangle => {
                    if idx + 4 > args.len() {
                        self.pending = None;
                        return;
                    }
                    let (x, y, w, h) = (args[idx], args[idx + 1], args[idx + 2], args[idx + 3]);
                    idx += 4;

                    let p1 = self.transform.transform_point(Point::new(x, y));
                    let p2 = self.transform.transform_point(Point::new(x + w, y + h));
                    self.pending = Some(Rect::new(
                        p1.x.min(p2.x),
                        p1.y.min(p2.y),
                        (p2.x - p1.x).abs(),
                        (p2.y - p1.y).abs(),
                    ));
                }
            }
        }
    }
}

/// Extract every filled axis-aligned rectangle from an operator sequence,
/// in page coordinates (post-transform, pre-normalization).
pub fn extract_filled_rects(operators: &[Operator]) -> Vec<Rect> {
    let mut extractor = PathExtractor::new();
    extractor.process(operators);
    extractor.into_rects()
}
