//! Positioned text elements from the page's text layer.

use crate::content::TextItem;
use crate::geometry::{Rect, TOLERANCE};

/// One glyph run with its geometry: the unit the binder assigns to cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Run geometry; height is the transform-derived value.
    pub rect: Rect,
    /// Run text.
    pub text: String,
}

/// Convert text items into elements.
///
/// Position comes from the transform's translation `(e, f)`; width from
/// the reported advance. Height is recomputed as `sqrt(c^2 + d^2)`, the
/// font's vertical scale: the natively reported height is inflated, and
/// the area-containment binder cannot tolerate that.
pub fn elements_from_items(items: &[TextItem]) -> Vec<Element> {
    items
        .iter()
        .map(|item| {
            let [_, _, c, d, e, f] = item.transform;
            Element {
                rect: Rect::new(e, f, item.width, (c * c + d * d).sqrt()),
                text: item.text.clone(),
            }
        })
        .collect()
}

/// Sort elements top-down in `y` buckets of width [`TOLERANCE`], then
/// left-to-right. Call after normalization; this is the reading order
/// the binder preserves within cells.
pub fn sort_elements(elements: &mut [Element]) {
    elements.sort_by(|a, b| {
        if (a.rect.y - b.rect.y).abs() < TOLERANCE {
            a.rect.x.partial_cmp(&b.rect.x).unwrap()
        } else {
            a.rect.y.partial_cmp(&b.rect.y).unwrap()
        }
    });
}
