use mupdf::{Document, TextPageFlags};

use pagesift_core::{BackendError, BackendKind, ExtractionBackend, PageText};

/// MuPDF-based implementation of [`ExtractionBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that builds without the `mupdf` feature do not
/// transitively depend on it. The document is opened directly from the
/// uploaded bytes; nothing touches the filesystem.
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MupdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionBackend for MupdfBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Mupdf
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, BackendError> {
        let document = Document::from_bytes(data, "application/pdf")
            .map_err(|e| BackendError::Open(e.to_string()))?;

        let mut pages = Vec::new();
        for (index, page_result) in document
            .pages()
            .map_err(|e| BackendError::Extraction(e.to_string()))?
            .enumerate()
        {
            let page = page_result.map_err(|e| BackendError::Extraction(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::Extraction(e.to_string()))?;

            // Block/line iteration keeps one output line per text line.
            let mut raw = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    raw.push_str(&line_text);
                    raw.push('\n');
                }
            }

            if let Some(page_text) = PageText::from_raw(index as u32 + 1, &raw) {
                pages.push(page_text);
            }
        }
        Ok(pages)
    }
}
