//! Page text sources.
//!
//! A [`PageSource`] hands out the text of one physical page at a time. The
//! text it returns is already cleaned: control characters other than
//! whitespace are removed, so the tokenizer only ever sees printable text.
//!
//! - [`pdf`] - PDF documents via `lopdf` (feature `pdf`)
//! - [`text`] - Plain text with form-feed page breaks (`pdftotext` output)
//! - [`MemorySource`] - Pages held in memory

#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfSource;
pub use text::TextSource;

use crate::error::{IndexError, Result};
use crate::index::types::PhysicalPage;
use std::path::Path;

/// Provides the text of each physical page of a document
pub trait PageSource {
    /// Number of physical pages in the document
    fn page_count(&self) -> u32;

    /// Cleaned text of a 1-based physical page
    fn page_text(&self, page: PhysicalPage) -> Result<String>;
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn page_count(&self) -> u32 {
        (**self).page_count()
    }

    fn page_text(&self, page: PhysicalPage) -> Result<String> {
        (**self).page_text(page)
    }
}

/// Open a document, choosing the source from the file extension
pub fn open_source(path: &Path) -> Result<Box<dyn PageSource>> {
    if is_pdf(path) {
        open_pdf(path)
    } else {
        Ok(Box::new(TextSource::open(path)?))
    }
}

#[cfg(feature = "pdf")]
fn open_pdf(path: &Path) -> Result<Box<dyn PageSource>> {
    Ok(Box::new(PdfSource::open(path)?))
}

#[cfg(not(feature = "pdf"))]
fn open_pdf(path: &Path) -> Result<Box<dyn PageSource>> {
    Err(IndexError::Document {
        path: path.to_path_buf(),
        reason: "built without PDF support (enable the `pdf` feature)".to_string(),
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Remove control characters, keeping whitespace
pub fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect()
}

/// Pages held in memory, page 1 first
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            pages: pages.into_iter().map(|p| clean_text(p.as_ref())).collect(),
        }
    }
}

impl PageSource for MemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: PhysicalPage) -> Result<String> {
        page_from(&self.pages, page)
    }
}

/// Look up a 1-based page in a list of page texts
pub(crate) fn page_from(pages: &[String], page: PhysicalPage) -> Result<String> {
    page.0
        .checked_sub(1)
        .and_then(|i| pages.get(i as usize))
        .cloned()
        .ok_or_else(|| IndexError::Extraction {
            page: page.0,
            reason: format!("document has {} pages", pages.len()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_control_chars() {
        assert_eq!(clean_text("a\u{0}b\u{7}c\td\ne\u{feff}"), "abc\td\ne\u{feff}");
        assert_eq!(clean_text("kerberos\u{1b}[0m"), "kerberos[0m");
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new(["one", "two"]);
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_text(PhysicalPage(2)).unwrap(), "two");
    }

    #[test]
    fn test_memory_source_out_of_range() {
        let source = MemorySource::new(["one"]);
        assert!(matches!(
            source.page_text(PhysicalPage(0)),
            Err(IndexError::Extraction { page: 0, .. })
        ));
        assert!(matches!(
            source.page_text(PhysicalPage(2)),
            Err(IndexError::Extraction { page: 2, .. })
        ));
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("book.pdf")));
        assert!(is_pdf(Path::new("BOOK.PDF")));
        assert!(!is_pdf(Path::new("book.txt")));
        assert!(!is_pdf(Path::new("book")));
    }
}
