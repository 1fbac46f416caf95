//! Coordinate normalization: PDF bottom-up to screen-style top-down.
//!
//! Everything downstream of this module (cell ordering, row bucketing,
//! reading order) assumes top-down `y`: after normalization a higher `y`
//! is visually lower on the page. The transform is centralized here so no
//! mixed conventions leak into the comparators.

use crate::geometry::Rect;
use crate::grid::Cell;
use crate::text::Element;

/// Flip a rectangle from bottom-up to top-down: `y <- -(y + height)`.
fn flip(rect: &mut Rect) {
    rect.y = -(rect.y + rect.height);
}

/// Normalize cells and elements in place for the given page rotation.
///
/// Both sets are Y-flipped. For a declared rotation of 90 degrees they
/// are additionally rotated clockwise, and each element then gets the
/// realignment `(y, width, height) <- (y - width, height, width)`, which
/// is what places glyph runs emitted under a rotated font transform back
/// inside their cells. Rotations of 180 and 270 degrees are not handled;
/// callers diagnose them and extraction usually yields no rows.
pub fn normalize_page(cells: &mut [Cell], elements: &mut [Element], rotation: i32) {
    for cell in cells.iter_mut() {
        flip(&mut cell.rect);
    }
    for element in elements.iter_mut() {
        flip(&mut element.rect);
    }

    if rotation == 90 {
        for cell in cells.iter_mut() {
            cell.rect = cell.rect.rotate90_clockwise();
        }
        for element in elements.iter_mut() {
            let rotated = element.rect.rotate90_clockwise();
            element.rect = Rect::new(
                rotated.x,
                rotated.y - rotated.width,
                rotated.height,
                rotated.width,
            );
        }
    }
}
