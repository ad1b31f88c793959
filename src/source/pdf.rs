use crate::error::{IndexError, Result};
use crate::index::types::PhysicalPage;
use crate::source::{clean_text, PageSource};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// PDF document read with `lopdf`
pub struct PdfSource {
    path: PathBuf,
    doc: Document,
    page_count: u32,
}

impl PdfSource {
    pub fn open(path: &Path) -> Result<Self> {
        let doc = Document::load(path).map_err(|e| IndexError::Document {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let page_count = u32::try_from(doc.get_pages().len()).unwrap_or(u32::MAX);

        log::debug!("opened {} ({} pages)", path.display(), page_count);

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            page_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for PdfSource {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_text(&self, page: PhysicalPage) -> Result<String> {
        if page.0 == 0 || page.0 > self.page_count {
            return Err(IndexError::Extraction {
                page: page.0,
                reason: format!("document has {} pages", self.page_count),
            });
        }

        let raw = self
            .doc
            .extract_text(&[page.0])
            .map_err(|e| IndexError::Extraction {
                page: page.0,
                reason: e.to_string(),
            })?;

        Ok(clean_text(&raw))
    }
}
