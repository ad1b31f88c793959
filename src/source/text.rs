use crate::error::Result;
use crate::index::types::PhysicalPage;
use crate::source::{clean_text, page_from, PageSource};
use memchr::memchr_iter;
use std::fs;
use std::path::Path;

/// Page separator written by `pdftotext`
const FORM_FEED: u8 = 0x0c;

/// Plain-text document with pages separated by form feeds
#[derive(Debug, Clone)]
pub struct TextSource {
    pages: Vec<String>,
}

impl TextSource {
    /// Read a text file; invalid UTF-8 sequences are stripped
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Split raw bytes into pages
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut pages = Vec::new();
        let mut start = 0;

        for pos in memchr_iter(FORM_FEED, bytes) {
            pages.push(decode_page(&bytes[start..pos]));
            start = pos + 1;
        }

        // A trailing form feed terminates the last page rather than starting a new one
        if start < bytes.len() || pages.is_empty() {
            pages.push(decode_page(&bytes[start..]));
        }

        Self { pages }
    }
}

fn decode_page(bytes: &[u8]) -> String {
    let valid: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    clean_text(&valid)
}

impl PageSource for TextSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: PhysicalPage) -> Result<String> {
        page_from(&self.pages, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_form_feed() {
        let source = TextSource::from_bytes(b"first\x0csecond\x0cthird");
        assert_eq!(source.page_count(), 3);
        assert_eq!(source.page_text(PhysicalPage(1)).unwrap(), "first");
        assert_eq!(source.page_text(PhysicalPage(3)).unwrap(), "third");
    }

    #[test]
    fn test_trailing_form_feed() {
        let source = TextSource::from_bytes(b"first\x0c\x0cthird\x0c");
        assert_eq!(source.page_count(), 3);
        assert_eq!(source.page_text(PhysicalPage(2)).unwrap(), "");
    }

    #[test]
    fn test_single_page_without_separator() {
        let source = TextSource::from_bytes(b"only page");
        assert_eq!(source.page_count(), 1);

        let empty = TextSource::from_bytes(b"");
        assert_eq!(empty.page_count(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_stripped() {
        let source = TextSource::from_bytes(b"ker\xffberos \xe2\x82mimikatz caf\xc3\xa9");
        assert_eq!(source.page_text(PhysicalPage(1)).unwrap(), "kerberos mimikatz caf\u{e9}");
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "alpha\x0cbeta\x0c").unwrap();

        let source = TextSource::open(&path).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_text(PhysicalPage(2)).unwrap(), "beta");
    }
}
