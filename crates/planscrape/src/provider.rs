//! The PDF decoder boundary.
//!
//! Decoding PDF bytes down to operators and text items is someone else's
//! job; the pipeline only needs a document that can hand over
//! [`PageContent`] per page. [`InMemoryDocument`] backs tests and the
//! replay CLI; live use wraps a real decoder in the same trait.

use planscrape_core::PageContent;

use crate::error::DecodeError;

/// A decoded register document the pipeline can walk page by page.
pub trait RegisterDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Decode one page. A failure aborts the current document only.
    fn page(&self, index: usize) -> Result<PageContent, DecodeError>;
}

/// A document held fully in memory as pre-decoded page content.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    pages: Vec<PageContent>,
}

impl InMemoryDocument {
    /// Wrap pre-decoded pages.
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }
}

impl RegisterDocument for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageContent, DecodeError> {
        self.pages.get(index).cloned().ok_or(DecodeError::PageOutOfRange {
            index,
            count: self.pages.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_document_pages() {
        let doc = InMemoryDocument::new(vec![PageContent::default(), PageContent::default()]);
        assert_eq!(doc.page_count(), 2);
        assert!(doc.page(1).is_ok());
    }

    #[test]
    fn in_memory_document_out_of_range() {
        let doc = InMemoryDocument::new(vec![]);
        let err = doc.page(0).unwrap_err();
        assert!(matches!(err, DecodeError::PageOutOfRange { index: 0, count: 0 }));
    }
}
