//! Grid reconstruction from ruling segments.
//!
//! The grid is rebuilt as the transitive closure of alignment rather than
//! by assuming a rectangular matrix: ruling endpoints and pairwise
//! intersections seed a canonical point set (near-duplicates collapsed),
//! and each point that has both a rightward and a downward aligned
//! neighbour spawns a cell. Near-duplicate cells arising from coordinate
//! noise are tolerated; the element binder disambiguates them.

use crate::geometry::{Point, Rect, TOLERANCE};
use crate::rulings::Rulings;
use crate::text::Element;

/// A reconstructed table cell: a rectangle plus the text elements it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell geometry.
    pub rect: Rect,
    /// Owned elements in reading order (populated by the binder).
    pub elements: Vec<Element>,
}

impl Cell {
    /// Create an empty cell covering `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            elements: Vec::new(),
        }
    }
}

/// Derive the canonical grid point set from rulings.
///
/// Seeds every ruling endpoint, then every horizontal/vertical pairwise
/// intersection. A candidate is only added when no existing point lies
/// within [`TOLERANCE`] euclidean distance, so coincident endpoints and
/// corner intersections collapse to one point.
pub fn grid_points(rulings: &Rulings) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();

    let mut add = |candidate: Point, points: &mut Vec<Point>| {
        if !points.iter().any(|p| p.distance(&candidate) < TOLERANCE) {
            points.push(candidate);
        }
    };

    for seg in &rulings.horizontal {
        add(seg.start, &mut points);
        add(seg.end, &mut points);
    }
    for seg in &rulings.vertical {
        add(seg.start, &mut points);
        add(seg.end, &mut points);
    }

    for h in &rulings.horizontal {
        for v in &rulings.vertical {
            if let Some(p) = h.intersect(v) {
                add(p, &mut points);
            }
        }
    }

    points
}

/// Build cells from the canonical point set.
///
/// For each point, the nearest aligned neighbour to the right (minimum
/// `x` greater than the point's, `y` within tolerance) and below
/// (minimum `y` greater, `x` within tolerance) define a cell's width and
/// height. Points missing either neighbour spawn no cell.
pub fn build_cells(points: &[Point]) -> Vec<Cell> {
    let mut cells = Vec::new();

    for p in points {
        let right = points
            .iter()
            .filter(|q| (q.y - p.y).abs() < TOLERANCE && q.x > p.x)
            .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        let down = points
            .iter()
            .filter(|q| (q.x - p.x).abs() < TOLERANCE && q.y > p.y)
            .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap());

        if let (Some(right), Some(down)) = (right, down) {
            cells.push(Cell::new(Rect::new(
                p.x,
                p.y,
                right.x - p.x,
                down.y - p.y,
            )));
        }
    }

    cells
}

/// Reconstruct cells from classified rulings (pre-normalization
/// coordinates).
pub fn reconstruct(rulings: &Rulings) -> Vec<Cell> {
    build_cells(&grid_points(rulings))
}

/// Sort cells top-down in `y` buckets of width [`TOLERANCE`], then
/// left-to-right. Call after normalization; the comparator assumes
/// top-down `y`.
pub fn sort_cells(cells: &mut [Cell]) {
    cells.sort_by(|a, b| {
        if (a.rect.y - b.rect.y).abs() < TOLERANCE {
            a.rect.x.partial_cmp(&b.rect.x).unwrap()
        } else {
            a.rect.y.partial_cmp(&b.rect.y).unwrap()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rulings::classify_rulings;

    /// Rulings for a `cols x rows` grid of 100x20 cells anchored at (0, 0).
    fn grid_rulings(cols: usize, rows: usize) -> Rulings {
        let width = 100.0 * cols as f64;
        let height = 20.0 * rows as f64;
        let mut rects = Vec::new();
        for r in 0..=rows {
            rects.push(Rect::new(0.0, 20.0 * r as f64, width, 1.0));
        }
        for c in 0..=cols {
            rects.push(Rect::new(100.0 * c as f64, 0.0, 1.0, height + 1.0));
        }
        classify_rulings(&rects)
    }

    #[test]
    fn test_grid_points_deduplicates_endpoints() {
        let rulings = grid_rulings(1, 1);
        let points = grid_points(&rulings);
        // A single 1x1 grid has exactly 4 corners.
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_grid_points_pairwise_minimum_distance() {
        let points = grid_points(&grid_rulings(3, 4));
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                assert!(
                    a.distance(b) >= TOLERANCE,
                    "points {a:?} and {b:?} too close"
                );
            }
        }
    }

    #[test]
    fn test_single_cell_from_four_corners() {
        let cells = reconstruct(&grid_rulings(1, 1));
        assert_eq!(cells.len(), 1);
        let rect = cells[0].rect;
        assert!((rect.x - 0.0).abs() < TOLERANCE);
        assert!((rect.y - 0.0).abs() < TOLERANCE);
        assert!((rect.width - 100.0).abs() < TOLERANCE);
        assert!((rect.height - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_grid_cell_count() {
        // cols x rows interior cells; the far edge points have no
        // right/down neighbour and spawn nothing.
        let cells = reconstruct(&grid_rulings(3, 2));
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_cells_have_ruling_corners() {
        let rulings = grid_rulings(2, 2);
        let points = grid_points(&rulings);
        for cell in reconstruct(&rulings) {
            let corners = [
                Point::new(cell.rect.x, cell.rect.y),
                Point::new(cell.rect.right(), cell.rect.y),
                Point::new(cell.rect.x, cell.rect.far_y()),
                Point::new(cell.rect.right(), cell.rect.far_y()),
            ];
            for corner in corners {
                assert!(
                    points.iter().any(|p| p.distance(&corner) < TOLERANCE),
                    "corner {corner:?} not backed by a grid point"
                );
            }
        }
    }

    #[test]
    fn test_endpoint_alignment_alone_closes_a_cell() {
        // Two stacked horizontal rulings: their aligned endpoints form a
        // frame even without vertical rulings.
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 1.0),
            Rect::new(0.0, 20.0, 100.0, 1.0),
        ];
        let cells = reconstruct(&classify_rulings(&rects));
        assert_eq!(cells.len(), 1);
        assert!((cells[0].rect.width - 100.0).abs() < TOLERANCE);
        assert!((cells[0].rect.height - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_incomplete_corner_skipped() {
        // An L of two rulings: only 3 distinct points, no cell.
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 50.0),
        ];
        let cells = reconstruct(&classify_rulings(&rects));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_intersection_points_complete_partial_grids() {
        // Long rulings crossing mid-span: the crossing point exists even
        // though it is no ruling's endpoint.
        let rects = [
            Rect::new(0.0, 50.0, 200.0, 1.0),
            Rect::new(0.0, 100.0, 200.0, 1.0),
            Rect::new(50.0, 0.0, 1.0, 150.0),
            Rect::new(150.0, 0.0, 1.0, 150.0),
        ];
        let cells = reconstruct(&classify_rulings(&rects));
        // The (50,50)-(150,100) region closes into a cell purely from
        // intersection points.
        assert!(cells.iter().any(|c| {
            (c.rect.x - 50.0).abs() < TOLERANCE
                && (c.rect.y - 50.0).abs() < TOLERANCE
                && (c.rect.width - 100.0).abs() < TOLERANCE
                && (c.rect.height - 50.0).abs() < TOLERANCE
        }));
    }

    #[test]
    fn test_sort_cells_buckets_rows_then_x() {
        let mut cells = vec![
            Cell::new(Rect::new(100.0, 41.0, 100.0, 20.0)),
            Cell::new(Rect::new(0.0, 40.0, 100.0, 20.0)),
            Cell::new(Rect::new(0.0, 20.0, 100.0, 20.0)),
        ];
        sort_cells(&mut cells);
        assert_eq!(cells[0].rect.y, 20.0);
        // y=40 and y=41 fall in the same bucket; x breaks the tie.
        assert_eq!(cells[1].rect.x, 0.0);
        assert_eq!(cells[2].rect.x, 100.0);
    }
}
