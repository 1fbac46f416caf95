//! Ownership binding of text elements to cells.

use crate::grid::Cell;
use crate::text::Element;

/// Share of an element's area a cell must contain to own it.
const OWNERSHIP_PERCENT: f64 = 50.0;

/// Assign each element to its owning cell.
///
/// For each element, in order, the first cell containing more than half
/// of the element's area takes it; elements owned by no cell are
/// dropped. With cells and elements both pre-sorted top-down, the
/// per-cell element lists come out in reading order, which is what makes
/// multi-line cells join correctly later.
pub fn bind_elements(cells: &mut [Cell], elements: Vec<Element>) {
    for element in elements {
        let owner = cells
            .iter_mut()
            .find(|cell| element.rect.percent_inside(&cell.rect) > OWNERSHIP_PERCENT);
        if let Some(cell) = owner {
            cell.elements.push(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn cell(x: f64, y: f64, w: f64, h: f64) -> Cell {
        Cell::new(Rect::new(x, y, w, h))
    }

    fn element(text: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
        Element {
            rect: Rect::new(x, y, w, h),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_contained_element_binds() {
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0)];
        bind_elements(&mut cells, vec![element("hi", 5.0, 5.0, 40.0, 8.0)]);
        assert_eq!(cells[0].elements.len(), 1);
        assert_eq!(cells[0].elements[0].text, "hi");
    }

    #[test]
    fn test_element_outside_all_cells_dropped() {
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0)];
        bind_elements(&mut cells, vec![element("gone", 500.0, 500.0, 40.0, 8.0)]);
        assert!(cells[0].elements.is_empty());
    }

    #[test]
    fn test_majority_overlap_decides_owner() {
        // Element straddles two cells, 75% in the second.
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0), cell(100.0, 0.0, 100.0, 20.0)];
        bind_elements(&mut cells, vec![element("x", 90.0, 5.0, 40.0, 8.0)]);
        assert!(cells[0].elements.is_empty());
        assert_eq!(cells[1].elements.len(), 1);
    }

    #[test]
    fn test_exact_half_overlap_does_not_bind() {
        // 50% is not "more than half": first cell covers exactly half,
        // nothing else covers more.
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0)];
        bind_elements(&mut cells, vec![element("x", 80.0, 5.0, 40.0, 8.0)]);
        assert!(cells[0].elements.is_empty());
    }

    #[test]
    fn test_first_matching_cell_wins_for_duplicates() {
        // Near-duplicate cells from grid noise: the earlier one owns.
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0), cell(0.5, 0.0, 100.0, 20.0)];
        bind_elements(&mut cells, vec![element("x", 10.0, 5.0, 40.0, 8.0)]);
        assert_eq!(cells[0].elements.len(), 1);
        assert!(cells[1].elements.is_empty());
    }

    #[test]
    fn test_multi_line_order_preserved() {
        let mut cells = vec![cell(0.0, 0.0, 100.0, 40.0)];
        bind_elements(
            &mut cells,
            vec![
                element("10 Smith St", 5.0, 5.0, 60.0, 8.0),
                element("Hawker 5434", 5.0, 20.0, 60.0, 8.0),
            ],
        );
        let texts: Vec<&str> = cells[0].elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["10 Smith St", "Hawker 5434"]);
    }

    #[test]
    fn test_bound_elements_satisfy_ownership_invariant() {
        let mut cells = vec![cell(0.0, 0.0, 100.0, 20.0), cell(100.0, 0.0, 100.0, 20.0)];
        let elements = vec![
            element("a", 5.0, 5.0, 40.0, 8.0),
            element("b", 130.0, 5.0, 40.0, 8.0),
            element("c", 95.0, 5.0, 10.0, 8.0), // straddles the boundary evenly
        ];
        bind_elements(&mut cells, elements);
        for cell in &cells {
            for el in &cell.elements {
                assert!(el.rect.percent_inside(&cell.rect) > 50.0);
            }
        }
    }
}
