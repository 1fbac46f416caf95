//! Ruling classification.
//!
//! A ruling is a thin filled rectangle that visually represents a grid
//! line: one dimension within [`TOLERANCE`], the other at least
//! [`MIN_RULING_LENGTH`]. Everything else (logos, shading, decorative
//! marks) is discarded before grid reconstruction.

use crate::geometry::{Point, Rect, Segment, TOLERANCE};

/// Minimum length of the long dimension for a thin rectangle to count
/// as a ruling rather than decoration.
pub const MIN_RULING_LENGTH: f64 = 10.0;

/// Ruling segments split by orientation, sorted for grid reconstruction.
#[derive(Debug, Clone, Default)]
pub struct Rulings {
    /// Horizontal rulings, sorted by `y` ascending.
    pub horizontal: Vec<Segment>,
    /// Vertical rulings, sorted by `x` ascending.
    pub vertical: Vec<Segment>,
}

impl Rulings {
    /// Total ruling count across both orientations.
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// True when no rulings were found.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// Classify filled rectangles into ruling segments.
///
/// A rectangle with `height <= TOLERANCE` and `width >= MIN_RULING_LENGTH`
/// becomes a horizontal segment along its near edge; the transposed test
/// yields a vertical segment. Rectangles passing neither test are dropped.
pub fn classify_rulings(rects: &[Rect]) -> Rulings {
    let mut rulings = Rulings::default();

    for rect in rects {
        if rect.height <= TOLERANCE && rect.width >= MIN_RULING_LENGTH {
            rulings.horizontal.push(Segment::new(
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.y),
            ));
        } else if rect.width <= TOLERANCE && rect.height >= MIN_RULING_LENGTH {
            rulings.vertical.push(Segment::new(
                Point::new(rect.x, rect.y),
                Point::new(rect.x, rect.far_y()),
            ));
        }
    }

    rulings
        .horizontal
        .sort_by(|a, b| a.start.y.partial_cmp(&b.start.y).unwrap());
    rulings
        .vertical
        .sort_by(|a, b| a.start.x.partial_cmp(&b.start.x).unwrap());

    rulings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_ruling_classified() {
        let rulings = classify_rulings(&[Rect::new(10.0, 50.0, 200.0, 1.0)]);
        assert_eq!(rulings.horizontal.len(), 1);
        assert!(rulings.vertical.is_empty());
        let seg = &rulings.horizontal[0];
        assert_eq!(seg.start, Point::new(10.0, 50.0));
        assert_eq!(seg.end, Point::new(210.0, 50.0));
    }

    #[test]
    fn test_vertical_ruling_classified() {
        let rulings = classify_rulings(&[Rect::new(10.0, 50.0, 1.0, 200.0)]);
        assert_eq!(rulings.vertical.len(), 1);
        assert!(rulings.horizontal.is_empty());
        let seg = &rulings.vertical[0];
        assert_eq!(seg.start, Point::new(10.0, 50.0));
        assert_eq!(seg.end, Point::new(10.0, 250.0));
    }

    #[test]
    fn test_short_thin_rect_discarded() {
        // Thin, but only 4 units long: decoration, not a ruling.
        let rulings = classify_rulings(&[Rect::new(0.0, 0.0, 4.0, 2.0)]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_thick_rect_discarded() {
        let rulings = classify_rulings(&[Rect::new(0.0, 0.0, 100.0, 50.0)]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_thickness_exactly_at_tolerance_accepted() {
        let rulings = classify_rulings(&[Rect::new(0.0, 0.0, 100.0, TOLERANCE)]);
        assert_eq!(rulings.horizontal.len(), 1);
    }

    #[test]
    fn test_length_exactly_at_minimum_accepted() {
        let rulings = classify_rulings(&[Rect::new(0.0, 0.0, MIN_RULING_LENGTH, 1.0)]);
        assert_eq!(rulings.horizontal.len(), 1);
    }

    #[test]
    fn test_horizontals_sorted_by_y() {
        let rulings = classify_rulings(&[
            Rect::new(0.0, 90.0, 100.0, 1.0),
            Rect::new(0.0, 10.0, 100.0, 1.0),
            Rect::new(0.0, 50.0, 100.0, 1.0),
        ]);
        let ys: Vec<f64> = rulings.horizontal.iter().map(|s| s.start.y).collect();
        assert_eq!(ys, vec![10.0, 50.0, 90.0]);
    }

    #[test]
    fn test_verticals_sorted_by_x() {
        let rulings = classify_rulings(&[
            Rect::new(200.0, 0.0, 1.0, 100.0),
            Rect::new(5.0, 0.0, 1.0, 100.0),
        ]);
        let xs: Vec<f64> = rulings.vertical.iter().map(|s| s.start.x).collect();
        assert_eq!(xs, vec![5.0, 200.0]);
    }

    #[test]
    fn test_mixed_input_splits_by_orientation() {
        let rulings = classify_rulings(&[
            Rect::new(0.0, 0.0, 100.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 100.0),
            Rect::new(40.0, 40.0, 4.0, 2.0), // stray
        ]);
        assert_eq!(rulings.horizontal.len(), 1);
        assert_eq!(rulings.vertical.len(), 1);
        assert_eq!(rulings.len(), 2);
    }
}
